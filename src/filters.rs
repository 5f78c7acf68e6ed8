//! Case-conversion filters, e.g. `{{ project_name | snake_case }}`.

use cruet::Inflector;
use minijinja::Environment;

/// Names of every filter registered by [`register_case_filters`].
pub const FILTER_NAMES: [&str; 8] = [
    "snake_case",
    "camel_case",
    "pascal_case",
    "kebab_case",
    "screaming_snake_case",
    "train_case",
    "title_case",
    "sentence_case",
];

pub fn register_case_filters(env: &mut Environment<'_>) {
    env.add_filter("snake_case", |value: String| value.to_snake_case());
    env.add_filter("camel_case", |value: String| value.to_camel_case());
    env.add_filter("pascal_case", |value: String| value.to_pascal_case());
    env.add_filter("kebab_case", |value: String| value.to_kebab_case());
    env.add_filter("screaming_snake_case", |value: String| value.to_screaming_snake_case());
    env.add_filter("train_case", |value: String| value.to_train_case());
    env.add_filter("title_case", |value: String| value.to_title_case());
    env.add_filter("sentence_case", |value: String| value.to_sentence_case());
}

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use kiln::functions::FunctionLibrary;
use kiln::system::SystemInfo;
use std::collections::HashMap;
use std::sync::Arc;

/// Deterministic host for template function tests.
pub struct FakeSystem {
    pub vars: HashMap<String, String>,
    pub real_name: Option<String>,
    pub now: DateTime<FixedOffset>,
}

impl FakeSystem {
    pub fn new() -> Self {
        let naive = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 8, 9)
            .unwrap();
        Self {
            vars: HashMap::new(),
            real_name: Some("Ada Lovelace".to_string()),
            now: FixedOffset::east_opt(3600)
                .unwrap()
                .from_local_datetime(&naive)
                .unwrap(),
        }
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    pub fn without_user(mut self) -> Self {
        self.real_name = None;
        self
    }

    pub fn library(self) -> FunctionLibrary {
        FunctionLibrary::with_system(Arc::new(self))
    }
}

impl SystemInfo for FakeSystem {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }

    fn real_name(&self) -> Option<String> {
        self.real_name.clone()
    }

    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

use std::any::Any;

use postview_states::{State, state_assign_impl};
use ustr::Ustr;

/// Where the post list is fetched from.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub api_base_url: String,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
        }
    }

    pub fn posts_url(&self) -> Ustr {
        Ustr::from(&format!(
            "{}/posts",
            self.api_base_url.trim_end_matches('/')
        ))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            api_base_url: "https://jsonplaceholder.typicode.com".to_owned(),
        }
    }
}

impl State for BusinessConfig {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        state_assign_impl(self, new_self);
    }
}

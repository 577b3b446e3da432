//! `security` plugin: flags code that evaluates strings or writes raw HTML

mod no_eval;
mod no_inner_html;
mod no_script_url;

pub use no_eval::NoEval;
pub use no_inner_html::NoInnerHtml;
pub use no_script_url::NoScriptUrl;

use crate::{Plugin, Rule};

#[derive(Debug, Clone, Copy, Default)]
pub struct SecurityPlugin;

impl SecurityPlugin {
    pub const NAME: &'static str = "security";
}

impl Plugin for SecurityPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn rules(&self) -> Vec<Box<dyn Rule>> {
        vec![
            Box::new(NoEval::new()),
            Box::new(NoInnerHtml::new()),
            Box::new(NoScriptUrl::new()),
        ]
    }
}

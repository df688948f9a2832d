//! Message templates for alert text
//!
//! The alert is the only user-facing string sent off the machine, so it is
//! configurable for localization.

use serde::Deserialize;
use std::collections::HashMap;

/// Default alert template, in the language of the default webhook's audience
pub const DEFAULT_ALERT_TEMPLATE: &str =
    "证书:{domain} 剩余:{days}天过期, 请准备好更新工作 (当前告警阈值:{threshold}天)";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Alert text; `{domain}`, `{days}` and `{threshold}` are substituted
    pub alert: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            alert: DEFAULT_ALERT_TEMPLATE.to_string(),
        }
    }
}

impl Messages {
    /// Format a message with placeholder substitution.
    ///
    /// The template is scanned once, so substituted values are never
    /// themselves searched for placeholders.
    pub fn format(template: &str, vars: &HashMap<&str, String>) -> String {
        let mut result = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find('{') {
            result.push_str(&rest[..start]);
            let tail = &rest[start..];

            let value = tail
                .find('}')
                .and_then(|end| vars.get(&tail[1..end]).map(|v| (end, v)));
            match value {
                Some((end, value)) => {
                    result.push_str(value);
                    rest = &tail[end + 1..];
                }
                None => {
                    result.push('{');
                    rest = &tail[1..];
                }
            }
        }

        result.push_str(rest);
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_replaces_every_occurrence() {
        let mut vars = HashMap::new();
        vars.insert("days", "5".to_string());
        assert_eq!(Messages::format("{days}/{days}", &vars), "5/5");
    }

    #[test]
    fn test_format_does_not_expand_substituted_values() {
        let mut vars = HashMap::new();
        vars.insert("domain", "{days}.example.com".to_string());
        vars.insert("days", "5".to_string());
        assert_eq!(
            Messages::format("{domain} in {days}", &vars),
            "{days}.example.com in 5"
        );
    }

    #[test]
    fn test_format_handles_stray_braces() {
        let mut vars = HashMap::new();
        vars.insert("days", "5".to_string());
        assert_eq!(Messages::format("{a{days}} {", &vars), "{a5} {");
    }

    #[test]
    fn test_format_leaves_unknown_placeholders() {
        let vars = HashMap::new();
        assert_eq!(Messages::format("{domain}", &vars), "{domain}");
    }
}

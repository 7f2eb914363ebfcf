//! Optional page helpers for the reset form
//!
//! Some deployments load a script that renders a strength meter and a
//! "passwords match" indicator. The form calls into it on every keystroke
//! when it is present and carries on untouched when it is not.

use std::fmt;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};

use crate::services::errors::{UiError, UiResult};

pub const STRENGTH_CHECK_NAME: &str = "checkPasswordStrength";
pub const MATCH_CHECK_NAME: &str = "checkPasswordMatch";

/// Capability to drive the external strength and match indicators
pub trait PasswordHooks {
    fn check_strength(&self, password: &str) -> UiResult<()>;

    fn check_match(&self, password: &str, confirmation: &str) -> UiResult<()>;
}

/// Used when no helper script is available
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl PasswordHooks for NoopHooks {
    fn check_strength(&self, _password: &str) -> UiResult<()> {
        Ok(())
    }

    fn check_match(&self, _password: &str, _confirmation: &str) -> UiResult<()> {
        Ok(())
    }
}

/// Looks the helpers up on `window` at call time
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowHooks;

impl WindowHooks {
    fn call_global(name: &str, args: &[&str]) -> UiResult<()> {
        let soft_error = |reason: String| UiError::SoftDependency {
            name: name.to_string(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| soft_error("no window".to_string()))?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(name))
            .map_err(|e| soft_error(format!("{:?}", e)))?;

        // Absent helper is the common case, not a failure
        if value.is_undefined() || value.is_null() {
            return Ok(());
        }

        let function: js_sys::Function = value
            .dyn_into()
            .map_err(|_| soft_error("not a function".to_string()))?;

        let result = match args {
            [] => function.call0(&JsValue::NULL),
            [a] => function.call1(&JsValue::NULL, &JsValue::from_str(a)),
            [a, b, ..] => function.call2(
                &JsValue::NULL,
                &JsValue::from_str(a),
                &JsValue::from_str(b),
            ),
        };

        result.map(|_| ()).map_err(|e| soft_error(format!("{:?}", e)))
    }
}

impl PasswordHooks for WindowHooks {
    fn check_strength(&self, password: &str) -> UiResult<()> {
        Self::call_global(STRENGTH_CHECK_NAME, &[password])
    }

    fn check_match(&self, password: &str, confirmation: &str) -> UiResult<()> {
        Self::call_global(MATCH_CHECK_NAME, &[password, confirmation])
    }
}

/// Shared handle so hooks can travel through component props
#[derive(Clone)]
pub struct SoftHooks(pub Rc<dyn PasswordHooks>);

impl SoftHooks {
    pub fn new(hooks: impl PasswordHooks + 'static) -> Self {
        Self(Rc::new(hooks))
    }

    pub fn noop() -> Self {
        Self::new(NoopHooks)
    }

    pub fn window() -> Self {
        Self::new(WindowHooks)
    }

    /// Run both checks. A failing check never stops the other; the failures
    /// come back for the caller to log.
    pub fn run(&self, password: &str, confirmation: &str) -> Vec<UiError> {
        [
            self.0.check_strength(password),
            self.0.check_match(password, confirmation),
        ]
        .into_iter()
        .filter_map(Result::err)
        .collect()
    }
}

impl PartialEq for SoftHooks {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for SoftHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SoftHooks")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<String>>,
        fail_strength: bool,
    }

    impl PasswordHooks for Rc<Recording> {
        fn check_strength(&self, password: &str) -> UiResult<()> {
            self.calls.borrow_mut().push(format!("strength:{}", password));
            if self.fail_strength {
                return Err(UiError::SoftDependency {
                    name: STRENGTH_CHECK_NAME.to_string(),
                    reason: "threw".to_string(),
                });
            }
            Ok(())
        }

        fn check_match(&self, password: &str, confirmation: &str) -> UiResult<()> {
            self.calls
                .borrow_mut()
                .push(format!("match:{}={}", password, confirmation));
            Ok(())
        }
    }

    #[test]
    fn test_run_calls_both_checks() {
        let recording = Rc::new(Recording::default());
        let hooks = SoftHooks::new(recording.clone());

        assert!(hooks.run("abc", "abd").is_empty());
        assert_eq!(
            *recording.calls.borrow(),
            vec!["strength:abc".to_string(), "match:abc=abd".to_string()]
        );
    }

    #[test]
    fn test_failing_strength_check_does_not_stop_match_check() {
        let recording = Rc::new(Recording {
            fail_strength: true,
            ..Default::default()
        });
        let hooks = SoftHooks::new(recording.clone());

        let errors = hooks.run("abc", "abc");
        assert_eq!(recording.calls.borrow().len(), 2);
        assert_eq!(
            errors,
            vec![UiError::SoftDependency {
                name: STRENGTH_CHECK_NAME.to_string(),
                reason: "threw".to_string(),
            }]
        );
    }

    #[test]
    fn test_failing_hook_reports_its_error() {
        let recording = Rc::new(Recording {
            fail_strength: true,
            ..Default::default()
        });
        let errors = SoftHooks::new(recording).run("short", "");

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].to_string(),
            "Soft dependency failed: checkPasswordStrength - threw"
        );
    }

    #[test]
    fn test_noop_hooks_and_identity_equality() {
        let hooks = SoftHooks::noop();
        assert!(hooks.run("anything", "else").is_empty());

        assert_eq!(hooks, hooks.clone());
        assert_ne!(hooks, SoftHooks::noop());
    }
}

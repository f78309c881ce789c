use std::path::Path;

/// Produce the canned fix advisory for a generated test file.
///
/// The path is interpolated for display only; the file is never read or
/// analyzed. The returned block is fixed remediation guidance standing in
/// for a real analysis backend, and says so in its closing line.
pub fn suggest_fix(test_file: &Path) -> String {
    format!(
        r#"Fix suggestion for {path}

Based on the failing test, here is a suggested patch scaffold.

Potential root causes:
  1. Null/undefined value handling: check for missing input validation
  2. Race condition: consider adding proper synchronization
  3. External dependency failure: add retry logic or a fallback

Suggested code changes:

    # 1. Add input validation
    def validate_request(data):
        if not data or "required_field" not in data:
            raise ValidationError("Missing required field")
        return True

    # 2. Add an error-handling wrapper
    def safe_operation(func):
        def wrapper(*args, **kwargs):
            try:
                return func(*args, **kwargs)
            except SpecificException as e:
                logger.error(f"Operation failed: {{e}}")
                return {{"error": str(e), "status": "failed"}}
        return wrapper

    # 3. Add retry logic for external calls
    @retry(max_attempts=3, backoff=ExponentialBackoff())
    def call_external_service(payload):
        # Your external service call here
        pass

Next steps:
  1. Implement the validation logic
  2. Add proper error handling
  3. Write additional edge case tests
  4. Run the fix against the generated test

Note: this is a canned placeholder, not real analysis output. A production
version would inspect the stack trace and surrounding code.
"#,
        path = test_file.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggestion_mentions_path() {
        let suggestion = suggest_fix(Path::new("tests/test_bug.py"));
        assert!(suggestion.contains("tests/test_bug.py"));
    }

    #[test]
    fn test_suggestion_is_labeled_as_placeholder() {
        let suggestion = suggest_fix(Path::new("x.py"));
        assert!(suggestion.contains("canned placeholder"));
        assert!(suggestion.contains("retry"));
        assert!(suggestion.contains("validate_request"));
    }

    #[test]
    fn test_suggestion_is_fixed_apart_from_path() {
        let a = suggest_fix(Path::new("a.py")).replace("a.py", "");
        let b = suggest_fix(Path::new("b.py")).replace("b.py", "");
        assert_eq!(a, b);
    }
}

/// The two screens of the top-up flow.
///
/// A session starts at `Form` and moves to `Payment` once the entered
/// details pass validation. There is no terminal step; the user can walk
/// back and forth for as long as the session lives.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum FormStep {
    #[default]
    Form,
    Payment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_starts_at_form() {
        assert_eq!(FormStep::default(), FormStep::Form);
    }
}

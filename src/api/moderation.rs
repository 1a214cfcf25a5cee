use super::error::ApiError;

/// Seam for course moderation actions. The backend exposes no moderation
/// endpoints yet; pages still render the buttons, so the actions live
/// behind this trait and the stub below answers for all of them.
pub trait Moderation {
    fn approve(&self, course_id: &str) -> Result<(), ApiError>;
    fn take_down(&self, course_id: &str) -> Result<(), ApiError>;
}

pub struct StubModeration;

impl Moderation for StubModeration {
    fn approve(&self, _course_id: &str) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented {
            action: "course approval",
        })
    }

    fn take_down(&self, _course_id: &str) -> Result<(), ApiError> {
        Err(ApiError::NotImplemented {
            action: "course takedown",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_refuses_every_action() {
        let stub = StubModeration;
        assert!(matches!(
            stub.approve("c1"),
            Err(ApiError::NotImplemented { .. })
        ));
        assert!(matches!(
            stub.take_down("c1"),
            Err(ApiError::NotImplemented { .. })
        ));
    }
}

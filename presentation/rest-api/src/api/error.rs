use poem_openapi::Object;

/// Wire shape of every failed recommendation: a single user-facing message.
#[derive(Object, Debug)]
pub struct ErrorBody {
    pub error: String,
}

pub trait IntoErrorBody {
    fn into_error_body(self) -> ErrorBody;
}

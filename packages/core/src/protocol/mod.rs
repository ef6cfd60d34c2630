// Протокол защищённых HTTP-сообщений
//
// caller -> serializer -> transform -> header merge -> builder -> http message

pub mod builder;
pub mod headers;
pub mod stream;
pub mod transform;

pub use builder::{build_request, build_response};
pub use headers::{MergePolicy, AUTH_HEADER, SIGNATURE_HEADER};
pub use stream::MessageBody;
pub use transform::{SecurityMode, Transform, TransformOutput};

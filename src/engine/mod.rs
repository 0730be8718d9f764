pub mod dispatcher;
pub mod loader;
pub mod method;
pub mod resolver;
pub mod transport;

pub use dispatcher::{Dispatcher, ResolvedRequest};
pub use method::{infer_method, Inference};
pub use resolver::{PathParamResolver, ResolvedPath};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport};

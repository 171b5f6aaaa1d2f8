mod bare;
mod error;
mod reqwest;
#[cfg(test)]
mod stub;

#[cfg(test)]
pub use self::stub::{HangingHttpClient, StubHttpClient, build_stub_response};
pub use self::{
    bare::{BareHttpClient, BareResponse},
    error::HttpClientError,
    reqwest::ReqwestHttpClient,
};

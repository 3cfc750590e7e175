//! LinkedIn Marketing API client
//!
//! [`LinkedInClient`] owns the transport and configuration and exposes one
//! async method per resource operation. Every method composes the same core
//! pieces: encode filters, drive pagination or batch resolution, decode.

mod linkedin;

pub use linkedin::{
    LinkedInClient, BATCH_GET_METHOD, FINDER_METHOD, RESTLI_METHOD_HEADER,
    RESTLI_PROTOCOL_HEADER, VERSION_HEADER,
};

#[cfg(test)]
mod tests;

#![doc = include_str!("../README.md")]

extern crate alloc;

mod config;
mod error;
mod executor;
mod fields;
mod http_client;
mod render;
mod status;

pub use self::{
    config::{ClientConfig, ConfigError},
    error::ApiError,
    executor::{call, call_with_cancellation},
    fields::{Fields, ParseError, parse_fields},
    http_client::{BareHttpClient, BareResponse, HttpClientError, ReqwestHttpClient},
    render::{RenderFormat, RenderOptions, render_result},
    status::{HttpStatusError, StatusCategory, classify_status},
};

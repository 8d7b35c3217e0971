//! API middleware. Only request logging lives here; CORS comes from
//! `tower-http` and is layered in `router`.

pub mod audit;

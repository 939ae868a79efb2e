//! HTTP API module for the salary engine.
//!
//! This module exposes the engine as JSON endpoints for dashboards and the
//! letter generator.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AnalysisRequest, IncreaseRequest, MarketDataRequest, MarketPositionRequest,
    RaiseHistoryRequest,
};
pub use response::{
    ApiError, HealthResponse, IncreaseResponse, JustificationResponse, ValidationResponse,
};
pub use state::AppState;

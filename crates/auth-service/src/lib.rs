//! # auth-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    CurrentUserResponse, HealthResponse, LoginRequest, ReadinessResponse, RegisterRequest,
    RegisterResponse, TokenRequest, TokenResponse,
};
pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SessionService,
};

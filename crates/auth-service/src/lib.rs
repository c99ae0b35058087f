//! # auth-service
//!
//! Application layer containing the credential and session use cases,
//! the service context, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, GetUserByEmailRequest, HealthChecks, HealthResponse, LoginRequest, LoginResponse,
    MessageResponse, ReadinessResponse, RegisterRequest, UpdateUserRequest, UserResponse,
};
pub use services::{
    AuthService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};

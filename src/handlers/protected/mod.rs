// handlers/protected/mod.rs - Protected handlers (JWT authentication required)
//
// Security Level: valid JWT, any role
// Route Prefix: /api/*
// Middleware: jwt_auth_middleware (plus require_trainer for /api/trainer/*)
//
// Trainers reach assignments and sessions here too; ownership is checked in
// the services and again by the stored functions.

pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod sessions;
pub mod students;
pub mod trainer;

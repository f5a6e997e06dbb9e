// handlers/elevated/mod.rs - Elevated handlers (admin JWT required)
//
// Security Level: valid JWT with role "admin"
// Route Prefix: /api/admin/*
// Middleware: jwt_auth_middleware → require_admin

pub mod assignments;
pub mod catalog;
pub mod students;
pub mod trainers;

//! # 사용자 DTO 모듈
//!
//! `POST /users` 요청/응답 데이터 구조를 모아둔 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   └── create_user.rs   ← UserRecord (검증 대상)
//! └── response/
//!     └── user_response.rs ← CreateUserResponse, HealthResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

/// HTTP status codes are carried as plain integers on the wire.
pub type HttpCode = u16;

pub const OK: HttpCode = 200;
pub const NO_CONTENT: HttpCode = 204;
pub const BAD_REQUEST: HttpCode = 400;
pub const UNAUTHORIZED: HttpCode = 401;
pub const NOT_FOUND: HttpCode = 404;
pub const CONFLICT: HttpCode = 409;
pub const UNPROCESSABLE_ENTITY: HttpCode = 422;
pub const INTERNAL_SERVER_ERROR: HttpCode = 500;

/// Content type set on every written envelope.
pub const CONTENT_TYPE_JSON: &str = "application/json";

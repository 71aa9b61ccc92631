use crate::controller::protocols::{HttpResponse, ResponseBody};
use crate::error::controller_error::{ControllerError, ServerError};

pub fn ok<T>(data: T) -> HttpResponse<T> {
    HttpResponse {
        status_code: 200,
        body: ResponseBody::Data(data),
    }
}

pub fn bad_request<T>(error: ControllerError) -> HttpResponse<T> {
    HttpResponse {
        status_code: 400,
        body: ResponseBody::Error(error),
    }
}

pub fn server_error<T>(error: ServerError) -> HttpResponse<T> {
    HttpResponse {
        status_code: 500,
        body: ResponseBody::Error(ControllerError::Server(error)),
    }
}

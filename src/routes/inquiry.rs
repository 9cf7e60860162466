use actix_web::{HttpResponse, Responder, get, post, web};
use validator::Validate;

use crate::forms::inquiry::CreateInquiryForm;
use crate::repository::DieselRepository;
use crate::routes::{ErrorBody, error_response};
use crate::services::inquiry as inquiry_service;

#[post("/properties/{id}/inquiries")]
pub async fn create_inquiry(
    property_id: web::Path<i32>,
    web::Json(form): web::Json<CreateInquiryForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(ErrorBody::validation(&errors));
    }

    let new_inquiry = form.into_new_inquiry(property_id.into_inner());
    match inquiry_service::create_inquiry(repo.get_ref(), new_inquiry) {
        Ok(inquiry) => HttpResponse::Created().json(inquiry),
        Err(e) => error_response("Property", e),
    }
}

#[get("/properties/{id}/inquiries")]
pub async fn list_inquiries(
    property_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match inquiry_service::list_property_inquiries(repo.get_ref(), property_id.into_inner()) {
        Ok(inquiries) => HttpResponse::Ok().json(inquiries),
        Err(e) => error_response("Property", e),
    }
}

use actix_web::{HttpResponse, Responder, delete, get, post, web};
use validator::Validate;

use crate::domain::property::NewProperty;
use crate::forms::property::CreatePropertyForm;
use crate::forms::search::PropertySearchParams;
use crate::repository::DieselRepository;
use crate::routes::{ErrorBody, error_response};
use crate::services::property as property_service;

#[get("/properties")]
pub async fn search_properties(
    params: web::Query<PropertySearchParams>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    // Parse before touching storage; invalid parameters never cost a query.
    let request = match params.into_inner().parse() {
        Ok(request) => request,
        Err(e) => return HttpResponse::BadRequest().json(ErrorBody::new(e.to_string())),
    };

    match property_service::search_properties(repo.get_ref(), request) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => error_response("Property", e),
    }
}

#[get("/properties/{id}")]
pub async fn get_property(
    property_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match property_service::get_property(repo.get_ref(), property_id.into_inner()) {
        Ok(property) => HttpResponse::Ok().json(property),
        Err(e) => error_response("Property", e),
    }
}

#[post("/properties")]
pub async fn create_property(
    web::Json(form): web::Json<CreatePropertyForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return HttpResponse::BadRequest().json(ErrorBody::validation(&errors));
    }

    let new_property: NewProperty = form.into();
    match property_service::create_property(repo.get_ref(), &new_property) {
        Ok(property) => HttpResponse::Created().json(property),
        Err(e) => error_response("Property", e),
    }
}

#[delete("/properties/{id}")]
pub async fn deactivate_property(
    property_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match property_service::deactivate_property(repo.get_ref(), property_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response("Property", e),
    }
}

#[get("/neighborhoods")]
pub async fn list_neighborhoods(repo: web::Data<DieselRepository>) -> impl Responder {
    match property_service::list_neighborhoods(repo.get_ref()) {
        Ok(neighborhoods) => HttpResponse::Ok().json(neighborhoods),
        Err(e) => error_response("Neighborhood", e),
    }
}

#[get("/boroughs")]
pub async fn list_boroughs(repo: web::Data<DieselRepository>) -> impl Responder {
    match property_service::list_boroughs(repo.get_ref()) {
        Ok(boroughs) => HttpResponse::Ok().json(boroughs),
        Err(e) => error_response("Borough", e),
    }
}

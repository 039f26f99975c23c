//! Per-domain routers. Each carries only its own service as state.

use crate::handlers::{breeder, cat, dog};
use crate::service::{BreederService, CatService, DogService};
use axum::{routing::get, Router};

pub fn dog_routes(svc: DogService) -> Router {
    Router::new()
        .route("/dog-breeds", get(dog::all_breeds))
        .route("/dog-breeds/:id", get(dog::breed_by_id))
        .route("/dogs", get(dog::all_dogs).post(dog::create_dog))
        .route(
            "/dogs/:id",
            get(dog::dog_by_id).put(dog::update_dog).delete(dog::delete_dog),
        )
        .with_state(svc)
}

pub fn cat_routes(svc: CatService) -> Router {
    Router::new()
        .route("/cat-breeds", get(cat::all_breeds))
        .route("/cat-breeds/:id", get(cat::breed_by_id))
        .route("/cats", get(cat::all_cats).post(cat::create_cat))
        .route(
            "/cats/:id",
            get(cat::cat_by_id).put(cat::update_cat).delete(cat::delete_cat),
        )
        .with_state(svc)
}

pub fn breeder_routes(svc: BreederService) -> Router {
    Router::new()
        .route("/breeders", get(breeder::all_breeders).post(breeder::create_breeder))
        .route(
            "/breeders/:id",
            get(breeder::breeder_by_id)
                .put(breeder::update_breeder)
                .delete(breeder::delete_breeder),
        )
        .with_state(svc)
}

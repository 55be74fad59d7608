//! Storefront application entry point.

use frontend::app::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::{extract::Request, middleware::Next};
        use backend::server_extra::products_rest::{catalog_facets_rest, get_product_rest, search_products_rest};
        use dioxus::logger::tracing::debug;
        use dioxus::server::axum;

        Ok(dioxus::server::router(App)
            .route("/api/products", axum::routing::get(search_products_rest))
            .route("/api/products/{product_id}", axum::routing::get(get_product_rest))
            .route("/api/catalog/facets", axum::routing::get(catalog_facets_rest))
            .layer(axum::middleware::from_fn(
                |request: Request, next: Next| async move {
                    debug!("request: {} {}", request.method(), request.uri());
                    next.run(request).await
                },
            )))
    });
}

use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::author::list_authors,
        api::author::create_author,
        api::author::get_author,
        api::author::update_author,
        api::author::delete_author,
        api::author::list_author_books,
        api::books::list_books,
        api::books::create_book,
        api::books::get_book,
        api::books::update_book,
        api::books::delete_book,
    ),
    components(schemas(
        crate::models::Author,
        crate::models::Book,
        crate::domain::AuthorInput,
        crate::domain::BookInput,
    )),
    tags(
        (name = "author-books", description = "Author and Books CRUD API")
    )
)]
pub struct ApiDoc;

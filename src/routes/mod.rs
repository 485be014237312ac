pub mod admin;

pub mod applications;

pub mod auth;

pub mod counselors;

pub mod courses;

pub mod favorites;

pub mod notifications;

pub mod tutorials;

pub mod universities;

use actix_web::web;

pub use admin::configure_admin_routes;
pub use applications::configure_application_routes;
pub use auth::configure_auth_routes;
pub use counselors::configure_counselor_routes;
pub use courses::configure_course_routes;
pub use favorites::configure_favorite_routes;
pub use notifications::configure_notification_routes;
pub use tutorials::configure_tutorial_routes;
pub use universities::configure_university_routes;

/// 注册全部 `/api` 路由
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes)
        .configure(configure_university_routes)
        .configure(configure_course_routes)
        .configure(configure_counselor_routes)
        .configure(configure_favorite_routes)
        .configure(configure_application_routes)
        .configure(configure_notification_routes)
        .configure(configure_tutorial_routes)
        .configure(configure_admin_routes);
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;

    use super::configure_api_routes;
    use crate::middlewares::IdentifyUser;
    use crate::middlewares::identity::USER_ID_HEADER;
    use crate::models::courses::requests::CreateCourseRequest;
    use crate::models::universities::requests::CreateUniversityRequest;
    use crate::storage::Storage;
    use crate::storage::sea_orm_storage::memory_storage;
    use crate::utils::{json_error_handler, query_error_handler};

    macro_rules! test_app {
        ($storage:expr) => {
            test::init_service(
                App::new()
                    .wrap(IdentifyUser)
                    .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                    .app_data(web::Data::new($storage.clone()))
                    .configure(configure_api_routes),
            )
            .await
        };
    }

    async fn storage() -> Arc<dyn Storage> {
        Arc::new(memory_storage().await)
    }

    async fn seed_course(storage: &Arc<dyn Storage>, faculty: &str) -> i64 {
        let university = storage
            .create_university(CreateUniversityRequest {
                name: "University of Edinburgh".to_string(),
                country: Some("United Kingdom".to_string()),
                location: None,
                ranking: None,
                description: None,
                website: None,
                logo_url: None,
            })
            .await
            .unwrap();

        storage
            .create_course(CreateCourseRequest {
                university_id: university.id,
                name: "MSc Artificial Intelligence".to_string(),
                faculty: Some(faculty.to_string()),
                level: Some("Postgraduate".to_string()),
                duration: None,
                tuition_fee: None,
                ielts_overall: Some("6.50".to_string()),
                intake: None,
                description: None,
            })
            .await
            .unwrap()
            .id
    }

    #[actix_web::test]
    async fn test_auth_user_requires_identity_and_upserts() {
        let storage = storage().await;
        let app = test_app!(storage);

        let req = test::TestRequest::get().uri("/api/auth/user").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 401);

        let req = test::TestRequest::get()
            .uri("/api/auth/user")
            .insert_header((USER_ID_HEADER, "u-1"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/auth/user")
            .insert_header((USER_ID_HEADER, "u-1"))
            .set_json(json!({ "email": "a@example.com", "firstName": "Ada" }))
            .to_request();
        let user: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(user["id"], "u-1");
        assert_eq!(user["firstName"], "Ada");

        let req = test::TestRequest::get()
            .uri("/api/auth/user")
            .insert_header((USER_ID_HEADER, "u-1"))
            .to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["email"], "a@example.com");
    }

    #[actix_web::test]
    async fn test_course_endpoints() {
        let storage = storage().await;
        let app = test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/universities")
            .set_json(json!({ "name": "University of Bristol" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let university: Value = test::read_body_json(resp).await;

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(json!({
                "universityId": university["id"],
                "name": "MSc Artificial Intelligence",
                "faculty": "Informatics",
                "level": "Postgraduate",
                "ieltsOverall": "6.50"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let course_id = created["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/courses/{course_id}"))
            .to_request();
        let course: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(course["name"], "MSc Artificial Intelligence");
        assert_eq!(course["ieltsOverall"], "6.5");
        assert_eq!(course["university"]["name"], "University of Bristol");

        let req = test::TestRequest::get()
            .uri("/api/courses?faculty=Informatics&ieltsScore=6.5&limit=10&offset=0")
            .to_request();
        let courses: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(courses.as_array().unwrap().len(), 1);

        let req = test::TestRequest::get()
            .uri("/api/courses?faculty=Medicine")
            .to_request();
        let courses: Value = test::call_and_read_body_json(&app, req).await;
        assert!(courses.as_array().unwrap().is_empty());

        let req = test::TestRequest::get()
            .uri("/api/filters/faculties")
            .to_request();
        let faculties: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(faculties, json!(["Informatics"]));

        let req = test::TestRequest::get().uri("/api/courses/abc").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/courses/999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": 404, "message": "Course not found" }));

        let req = test::TestRequest::get()
            .uri("/api/courses?limit=many")
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get()
            .uri("/api/courses?limit=10&offset=9223372036854775808")
            .to_request();
        let courses: Value = test::call_and_read_body_json(&app, req).await;
        assert!(courses.as_array().unwrap().is_empty());

        let req = test::TestRequest::post()
            .uri("/api/courses")
            .set_json(json!({ "universityId": 999, "name": "Orphan" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "University 999 does not exist");
    }

    #[actix_web::test]
    async fn test_favorite_lifecycle() {
        let storage = storage().await;
        let course_id = seed_course(&storage, "Law").await;
        let app = test_app!(storage);

        let add = || {
            test::TestRequest::post()
                .uri("/api/favorites")
                .insert_header((USER_ID_HEADER, "u-1"))
                .set_json(json!({ "courseId": course_id }))
                .to_request()
        };
        assert_eq!(test::call_service(&app, add()).await.status(), StatusCode::CREATED);
        assert_eq!(test::call_service(&app, add()).await.status(), StatusCode::CONFLICT);

        let check = || {
            test::TestRequest::get()
                .uri(&format!("/api/favorites/{course_id}/check"))
                .insert_header((USER_ID_HEADER, "u-1"))
                .to_request()
        };
        let status: Value = test::call_and_read_body_json(&app, check()).await;
        assert_eq!(status, json!({ "isFavorite": true }));

        let req = test::TestRequest::get()
            .uri("/api/favorites")
            .insert_header((USER_ID_HEADER, "u-1"))
            .to_request();
        let favorites: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(favorites[0]["courseId"], course_id);
        assert_eq!(favorites[0]["course"]["faculty"], "Law");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/favorites/{course_id}"))
            .insert_header((USER_ID_HEADER, "u-1"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let status: Value = test::call_and_read_body_json(&app, check()).await;
        assert_eq!(status, json!({ "isFavorite": false }));

        let req = test::TestRequest::post()
            .uri("/api/favorites")
            .insert_header((USER_ID_HEADER, "u-1"))
            .set_json(json!({ "courseId": 4242 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_application_flow() {
        let storage = storage().await;
        let course_id = seed_course(&storage, "Engineering").await;
        let app = test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/applications")
            .insert_header((USER_ID_HEADER, "u-1"))
            .set_json(json!({
                "fullName": "Sam Taylor",
                "email": "sam@example.com",
                "selectedCourses": [course_id]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let application: Value = test::read_body_json(resp).await;
        assert_eq!(application["status"], "pending");
        let application_id = application["id"].as_i64().unwrap();

        let req = test::TestRequest::get()
            .uri("/api/applications")
            .insert_header((USER_ID_HEADER, "u-1"))
            .to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed[0]["courseDetails"][0]["id"], course_id);
        assert_eq!(
            listed[0]["courseDetails"][0]["universityName"],
            "University of Edinburgh"
        );

        let req = test::TestRequest::patch()
            .uri(&format!("/api/applications/{application_id}/status"))
            .set_json(json!({ "status": "under review" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["status"], "under review");

        let req = test::TestRequest::patch()
            .uri("/api/applications/777/status")
            .set_json(json!({ "status": "accepted" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::patch()
            .uri("/api/applications/0/status")
            .set_json(json!({ "status": "accepted" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::get().uri("/api/admin/applications").to_request();
        let all: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_notification_flow() {
        let storage = storage().await;
        let app = test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/notifications")
            .set_json(json!({
                "userId": "u-1",
                "title": "Welcome",
                "message": "Thanks for signing up"
            }))
            .to_request();
        let notification: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(notification["notificationType"], "info");
        let id = notification["id"].as_i64().unwrap();

        let count = || {
            test::TestRequest::get()
                .uri("/api/notifications/unread-count")
                .insert_header((USER_ID_HEADER, "u-1"))
                .to_request()
        };
        let body: Value = test::call_and_read_body_json(&app, count()).await;
        assert_eq!(body, json!({ "count": 1 }));

        for _ in 0..2 {
            let req = test::TestRequest::patch()
                .uri(&format!("/api/notifications/{id}/read"))
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);
        }

        let body: Value = test::call_and_read_body_json(&app, count()).await;
        assert_eq!(body, json!({ "count": 0 }));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let storage = storage().await;
        let app = test_app!(storage);

        let req = test::TestRequest::post()
            .uri("/api/tutorials")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 400);
    }
}

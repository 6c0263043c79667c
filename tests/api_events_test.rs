//! Integration tests for the events API endpoints

mod test_utils;

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;
    use workcal::api::public::events::{DeleteEventResponse, TimeOffResponse};
    use workcal::calendar::Event;

    use crate::test_utils::{body_to_json, body_to_string, test_app};

    async fn list(app: &Router) -> Vec<Event> {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/events")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_to_json(response.into_body()).await
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .uri(uri)
            .method(method)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn it_lists_seed_events() {
        let app = test_app();
        let events = list(&app).await;
        assert_eq!(events.len(), 6);
        assert!(events.iter().any(|e| e.id == "standup" && e.is_recurring()));
    }

    #[tokio::test]
    async fn it_creates_an_event() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/events",
                serde_json::json!({
                    "title": "Sprint Planning",
                    "type": "meeting",
                    "subtype": "sprint-planning",
                    "startTime": "2025-12-09T14:00:00Z",
                    "endTime": "2025-12-09T15:00:00Z",
                    "description": "   "
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: Event = body_to_json(response.into_body()).await;
        assert!(created.id.starts_with("event-"));
        assert!(created.is_partial_day);
        assert_eq!(created.description, None);

        let events = list(&app).await;
        assert_eq!(events.len(), 7);
        assert_eq!(events.last().map(|e| e.id.as_str()), Some(created.id.as_str()));
    }

    #[tokio::test]
    async fn it_stores_all_day_events_at_noon_utc() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/events",
                serde_json::json!({
                    "title": "Kenji's Birthday",
                    "type": "birthday",
                    "person": "Kenji Sato",
                    "startTime": "2025-12-12T00:00:00+09:00",
                    "endTime": "2025-12-12T00:00:00+09:00",
                    "isAllDay": true,
                    "timezone": "Asia/Tokyo"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created: Event = body_to_json(response.into_body()).await;
        let noon = "2025-12-12T12:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap();
        assert_eq!(created.start_time, noon);
        assert_eq!(created.end_time, noon);
    }

    #[tokio::test]
    async fn it_rejects_an_invalid_event() {
        let app = test_app();

        // A person only belongs on time off, birthdays and anniversaries
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/events",
                serde_json::json!({
                    "title": "1:1",
                    "type": "meeting",
                    "person": "Sarah Chen",
                    "startTime": "2025-12-09T14:00:00Z",
                    "endTime": "2025-12-09T13:00:00Z"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = body_to_string(response.into_body()).await;
        assert!(body.contains("person"));
        assert!(body.contains("end"));
        assert_eq!(list(&app).await.len(), 6);
    }

    #[tokio::test]
    async fn it_updates_an_event() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/events/design-review",
                serde_json::json!({
                    "title": "Design Crit",
                    "endTime": "2025-12-09T10:30:00Z"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated: Event = body_to_json(response.into_body()).await;
        assert_eq!(updated.title, "Design Crit");
        // Now spans two dates
        assert!(!updated.is_partial_day);

        let events = list(&app).await;
        let stored = events.iter().find(|e| e.id == "design-review").unwrap();
        assert_eq!(stored, &updated);
    }

    #[tokio::test]
    async fn it_clears_a_field_with_null() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/events/standup",
                serde_json::json!({ "recurrence": null }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let updated: Event = body_to_json(response.into_body()).await;
        assert!(!updated.is_recurring());
        assert_eq!(updated.title, "Daily Standup");
    }

    #[tokio::test]
    async fn it_returns_404_for_unknown_events() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                "/api/events/nope",
                serde_json::json!({ "title": "Nothing" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/events/nope")
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_deletes_one_occurrence() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/events/standup?occurrence=2025-12-08")
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let resp: DeleteEventResponse = body_to_json(response.into_body()).await;
        assert!(resp.success);
        assert_eq!(resp.remaining, 6);

        let events = list(&app).await;
        let standup = events.iter().find(|e| e.id == "standup").unwrap();
        let exceptions = &standup.recurrence.as_ref().unwrap().exceptions;
        assert_eq!(exceptions.len(), 1);
        assert!(exceptions.contains(&chrono::NaiveDate::from_ymd_opt(2025, 12, 8).unwrap()));
    }

    #[tokio::test]
    async fn it_deletes_a_whole_series() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/events/all-hands")
                    .method("DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let resp: DeleteEventResponse = body_to_json(response.into_body()).await;
        assert_eq!(resp.remaining, 5);
        assert!(list(&app).await.iter().all(|e| e.id != "all-hands"));
    }

    #[tokio::test]
    async fn it_lists_people_on_time_off() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/events/time-off?start=2025-12-16T09:00:00Z&end=2025-12-16T10:00:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let resp: TimeOffResponse = body_to_json(response.into_body()).await;
        assert_eq!(resp.people, vec!["Alex Kim".to_string()]);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/events/time-off?start=2025-12-18T09:00:00Z&end=2025-12-18T10:00:00Z")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let resp: TimeOffResponse = body_to_json(response.into_body()).await;
        assert!(resp.people.is_empty());
    }
}

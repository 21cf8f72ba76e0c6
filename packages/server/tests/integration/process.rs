use crate::common::{TestApp, file_part, submission_form};

mod submission_processing {
    use super::*;

    #[tokio::test]
    async fn saree_submission_end_to_end() {
        let app = TestApp::spawn().await;

        let form = submission_form("Test Saree").text("tags", "Saree, Silk");
        let res = app.process(form).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["name"].as_str().unwrap(), "Test Saree");
        assert_eq!(
            res.body["tags"],
            serde_json::json!(["saree", "silk"]),
            "explicit tags must come back trimmed and lower-cased"
        );
        assert_eq!(res.body["price_range"].as_str().unwrap(), "₹1500–₹3500");
        assert!(
            res.body["story"]
                .as_str()
                .unwrap()
                .contains("A Local Artisan")
        );
        assert!(res.body["image_link"].is_null());

        let id = res.body["id"].as_str().unwrap();
        assert_eq!(
            res.body["certificate_link"].as_str().unwrap(),
            format!("/certificate/{id}")
        );
        assert!(
            res.body["qr_link"]
                .as_str()
                .unwrap()
                .starts_with("/uploads/qrcodes/")
        );

        let page = app.get(&format!("/certificate/{id}")).await;
        assert_eq!(page.status().as_u16(), 200);
        assert!(page.text().await.unwrap().contains("Test Saree"));
    }

    #[tokio::test]
    async fn image_filename_drives_tag_inference() {
        let app = TestApp::spawn().await;

        let form =
            submission_form("Blue Mug").part("image", file_part("blue_pottery_mug.jpg", b"JPEG"));
        let res = app.process(form).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["tags"], serde_json::json!(["pottery", "mug"]));
        assert_eq!(res.body["price_range"].as_str().unwrap(), "₹300–₹1200");

        // The stored image is served back under the returned link.
        let image_link = res.body["image_link"].as_str().unwrap();
        assert!(image_link.starts_with("/uploads/images/"));
        let served = app.get(image_link).await;
        assert_eq!(served.status().as_u16(), 200);
        assert_eq!(
            served.headers()["content-type"].to_str().unwrap(),
            "image/jpeg"
        );
        assert_eq!(served.bytes().await.unwrap().as_ref(), b"JPEG");
    }

    #[tokio::test]
    async fn transcript_drives_the_story() {
        let app = TestApp::spawn().await;

        let form = submission_form("Clay Pot").text("transcript", "my name is Kabir, I shape clay");
        let res = app.process(form).await;

        assert_eq!(res.status, 200);
        let story = res.body["story"].as_str().unwrap();
        assert!(story.starts_with("Shaped by"));
        assert!(story.contains("Kabir"));
    }

    #[tokio::test]
    async fn audio_upload_yields_placeholder_transcript_story() {
        let app = TestApp::spawn().await;

        let form =
            submission_form("Voice Product").part("audio", file_part("note.mp3", b"AUDIO_BYTES"));
        let res = app.process(form).await;

        assert_eq!(res.status, 200);
        // Placeholder transcript has no craft keywords, so the generic
        // template applies.
        assert!(
            res.body["story"]
                .as_str()
                .unwrap()
                .ends_with("keeping local traditions alive.")
        );
    }

    #[tokio::test]
    async fn no_inputs_fall_back_to_defaults() {
        let app = TestApp::spawn().await;

        let res = app.process(submission_form("Plain Craft")).await;

        assert_eq!(res.status, 200);
        assert_eq!(
            res.body["tags"],
            serde_json::json!(["handmade", "traditional"])
        );
        // Default transcript mentions weaving, so the weaving template wins.
        assert!(res.body["story"].as_str().unwrap().contains("Handwoven by"));
    }

    #[tokio::test]
    async fn missing_product_name_is_rejected() {
        let app = TestApp::spawn().await;

        let form = reqwest::multipart::Form::new().text("tags", "saree");
        let res = app.process(form).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn blank_product_name_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.process(submission_form("   ")).await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"].as_str().unwrap(), "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn concurrent_submissions_both_persist() {
        let app = TestApp::spawn().await;

        let (first, second) = tokio::join!(
            app.process(submission_form("First Product")),
            app.process(submission_form("Second Product")),
        );
        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200);

        for res in [&first, &second] {
            let id = res.body["id"].as_str().unwrap();
            let page = app.get(&format!("/certificate/{id}")).await;
            assert_eq!(page.status().as_u16(), 200);
        }
    }
}

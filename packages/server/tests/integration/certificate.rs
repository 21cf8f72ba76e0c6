use crate::common::{TestApp, submission_form};

mod certificate_page {
    use super::*;

    #[tokio::test]
    async fn renders_the_full_record() {
        let app = TestApp::spawn().await;

        let form = submission_form("Handloom Shawl")
            .text("tags", "shawl, handloom")
            .text("transcript", "my name is Asha Devi, I weave shawls");
        let res = app.process(form).await;
        assert_eq!(res.status, 200);
        let id = res.body["id"].as_str().unwrap();

        let page = app.get(&format!("/certificate/{id}")).await;
        assert_eq!(page.status().as_u16(), 200);

        let html = page.text().await.unwrap();
        assert!(html.contains("Authenticity Certificate"));
        assert!(html.contains("Handloom Shawl"));
        assert!(html.contains("Handwoven by Asha Devi"));
        assert!(html.contains("shawl, handloom"));
        assert!(html.contains("₹1500–₹3500"));
        assert!(html.contains(&format!("/uploads/qrcodes/{id}.png")));
    }

    #[tokio::test]
    async fn unknown_id_renders_distinct_not_found_page() {
        let app = TestApp::spawn().await;

        let page = app.get("/certificate/does-not-exist").await;
        assert_eq!(page.status().as_u16(), 404);
        assert!(page.text().await.unwrap().contains("Certificate not found"));
    }

    #[tokio::test]
    async fn certificate_qr_image_is_served_as_png() {
        let app = TestApp::spawn().await;

        let res = app.process(submission_form("QR Product")).await;
        assert_eq!(res.status, 200);
        let qr_link = res.body["qr_link"].as_str().unwrap().to_string();

        let served = app.get(&qr_link).await;
        assert_eq!(served.status().as_u16(), 200);
        assert_eq!(
            served.headers()["content-type"].to_str().unwrap(),
            "image/png"
        );
        let bytes = served.bytes().await.unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }
}

//! 融合流程结合接口解析的测试
//!
//! 服务端响应直接用 JSON 文本模拟

use face_fusion_common::api::{parse_fusion, parse_templates, parse_upload};
use face_fusion_common::{
    build_tiles, AppConfig, Error, FusionWorkflow, ThumbnailSource, UploadedPhoto, WorkflowState,
};

const TEMPLATES_JSON: &str = r#"{
    "success": true,
    "data": [
        {"id": "1", "name": "周繁漪定妆照1", "description": "经典造型", "style": "fanyi1",
         "url": "/fanyi?template=1", "thumbnailUrl": "https://example.com/templates/fanyi1_thumb.jpg"},
        {"id": "2", "name": "周繁漪定妆照2", "description": "优雅风格", "style": "fanyi2",
         "url": "/fanyi?template=2", "thumbnailUrl": "https://bucket.oss-cn-beijing.aliyuncs.com/t2.jpg"},
        {"id": "3", "name": "周繁漪定妆照3", "description": "时尚造型", "style": "fanyi3",
         "url": "/fanyi?template=3", "thumbnailUrl": "/templates/template3.jpg",
         "localThumbnail": "/templates/template3.jpg"}
    ]
}"#;

fn photo(mime: &str, size: u64) -> UploadedPhoto<Vec<u8>> {
    UploadedPhoto::new("selfie", mime, size, vec![0u8; 4])
}

/// 模板列表：每个模板一块瓦片，顺序不变
#[test]
fn test_gallery_from_server_response() {
    let config = AppConfig::default();
    let templates = parse_templates(TEMPLATES_JSON).expect("模板解析失败");
    let tiles = build_tiles(&templates, &config);

    assert_eq!(tiles.len(), 3);
    assert_eq!(tiles[0].template_id, "1");
    assert_eq!(tiles[1].template_id, "2");
    assert_eq!(tiles[2].template_id, "3");

    // example.com 的缩略图被跳过
    assert_eq!(tiles[0].thumbnails.len(), 2);
    assert!(matches!(tiles[0].thumbnails[1], ThumbnailSource::Placeholder { .. }));

    assert_eq!(
        tiles[1].thumbnails[1],
        ThumbnailSource::Remote("https://bucket.oss-cn-beijing.aliyuncs.com/t2.jpg".into())
    );
}

/// 10MB 的 PNG 被拒绝，不产生上传
#[test]
fn test_large_png_never_reaches_upload() {
    let config = AppConfig::default();
    let mut wf = FusionWorkflow::new("2", config.max_upload_bytes);

    let err = wf.select_photo(photo("image/png", 10 * 1024 * 1024)).unwrap_err();
    assert_eq!(err.to_string(), "图片大小不能超过5MB");
    assert_eq!(wf.state(), WorkflowState::Idle);
    assert!(matches!(wf.begin_generate(), Err(Error::NoPhoto)));
}

/// 上传、融合、保存的完整流程
#[test]
fn test_full_flow_with_server_responses() {
    let config = AppConfig::default();
    let mut wf = FusionWorkflow::new("2", config.max_upload_bytes);
    wf.select_photo(photo("image/jpeg", 300 * 1024)).unwrap();
    assert!(!wf.can_save());

    let (ticket, uploaded) = wf.begin_generate().unwrap();
    assert_eq!(uploaded.payload.len(), 4);

    let upload = parse_upload(r#"{"success": true, "url": "https://oss.test/user.jpg"}"#);
    let request = wf.complete_upload(ticket, upload).unwrap();
    assert_eq!(request.template_id, "2");

    let fusion = parse_fusion(
        r#"{"success": true, "data": {"imageUrl": "https://oss.test/out.jpg",
            "localImageUrl": "/images/results/user_1.jpg", "downloadUrl": "/download/user_1.jpg"}}"#,
    );
    let result = wf.complete_fusion(ticket, fusion).unwrap();
    assert_eq!(result.display_url(), "/images/results/user_1.jpg");

    assert_eq!(wf.state(), WorkflowState::ResultReady);
    assert_eq!(wf.save_target(), Some("/download/user_1.jpg"));
    assert_eq!(wf.share_link(), Some("/images/results/user_1.jpg"));
}

/// 服务端返回失败时回到已选照片状态，可再次生成
#[test]
fn test_server_failure_allows_retry() {
    let mut wf = FusionWorkflow::new("1", AppConfig::default().max_upload_bytes);
    wf.select_photo(photo("image/jpeg", 1024)).unwrap();

    let (ticket, _) = wf.begin_generate().unwrap();
    let upload = parse_upload(r#"{"success": false, "message": "不支持的文件类型"}"#);
    assert!(wf.complete_upload(ticket, upload).is_err());
    assert_eq!(wf.state(), WorkflowState::PhotoSelected);

    let (retry, _) = wf.begin_generate().unwrap();
    assert_ne!(retry, ticket);
    assert_eq!(wf.state(), WorkflowState::Uploading);
}

/// 重置后的状态与新建时一致
#[test]
fn test_reset_matches_fresh_workflow() {
    let fresh: FusionWorkflow<Vec<u8>> = FusionWorkflow::new("1", AppConfig::default().max_upload_bytes);

    let mut wf = FusionWorkflow::new("1", AppConfig::default().max_upload_bytes);
    wf.select_photo(photo("image/jpeg", 1024)).unwrap();
    let (ticket, _) = wf.begin_generate().unwrap();
    wf.complete_upload(ticket, Ok("u".into())).unwrap();
    wf.reset();

    assert_eq!(wf.state(), fresh.state());
    assert_eq!(wf.can_generate(), fresh.can_generate());
    assert_eq!(wf.can_save(), fresh.can_save());
    assert_eq!(wf.photo().is_none(), fresh.photo().is_none());

    // 重置前发出的请求结果被丢弃
    assert!(matches!(
        wf.complete_fusion(ticket, parse_fusion(r#"{"success": true, "data": {"imageUrl": "x"}}"#)),
        Err(Error::StaleResponse)
    ));
    assert_eq!(wf.state(), WorkflowState::Idle);
}

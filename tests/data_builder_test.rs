use blog_e2e::utils::data_builder::{
    create_quick_comment, create_quick_post, create_quick_user, BlockBuilder, BlogPostType,
    CommentType, PostBuilder, UserBuilder,
};
use blog_e2e::utils::fake;
use blog_e2e::utils::validation::Validate;
use std::collections::HashSet;

#[test]
fn test_quick_users_are_valid_and_distinct() {
    let emails: HashSet<String> = (0..50)
        .map(|_| {
            let user = create_quick_user();
            assert!(user.validate().is_ok(), "{:?}", user);
            user.email
        })
        .collect();
    assert_eq!(emails.len(), 50);
}

#[test]
fn test_weak_password_rejected() {
    let user = UserBuilder::new().with_password("password").build();
    assert!(user.validate().is_err());
}

#[test]
fn test_community_post_payload() {
    let post = PostBuilder::new()
        .with_author(5)
        .as_community(12)
        .add_random_text_blocks(3)
        .with_thumbnail("https://picsum.photos/seed/1/800/400")
        .build();

    assert_eq!(post.post_type, BlogPostType::Community);
    assert_eq!(post.community_id, Some(12));
    assert_eq!(post.blocks.len(), 3);

    let value = serde_json::to_value(&post).unwrap();
    assert_eq!(value["type"], "COMMUNITY");
    assert_eq!(value["communityId"], 12);
    assert_eq!(value["thumbnailUrl"], "https://picsum.photos/seed/1/800/400");
}

#[test]
fn test_quick_post_and_comment() {
    let post = create_quick_post(9, 2);
    assert_eq!(post.author_id, 9);
    assert_eq!(post.blocks.len(), 2);
    assert!(!post.title.is_empty());

    let comment = create_quick_comment(100, 9);
    assert_eq!(comment.post_id, 100);
    assert_eq!(comment.commenter_id, 9);
    assert_eq!(comment.comment_type, CommentType::Post);
}

#[test]
fn test_block_builder_layout() {
    let block = BlockBuilder::new()
        .as_quote()
        .with_content("Stay hungry")
        .at_position(2, 300)
        .with_size(6, 150)
        .build();
    let value = serde_json::to_value(&block).unwrap();
    assert_eq!(value["type"], "QUOTE");
    assert_eq!(value["x"], 2);
    assert_eq!(value["y"], 300);
    assert_eq!(value["width"], 6);
    assert_eq!(value["height"], 150);
}

#[test]
fn test_fake_text_respects_limit() {
    for limit in [10, 40, 200] {
        assert!(fake::text(limit).chars().count() <= limit);
    }
    assert_eq!(fake::words(4).len(), 4);
    assert!(fake::sentence(6).ends_with('.'));
    assert!(fake::image_url().starts_with("https://picsum.photos/"));
}

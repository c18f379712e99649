//! Integration tests for the CRUD repositories: create/read/update/delete,
//! cascade behaviour, unique constraints, and the is_active toggles.

use sqlx::PgPool;

use parish_db::models::album::{CreateAlbum, UpdateAlbum};
use parish_db::models::donation::CreateDonation;
use parish_db::models::photo::CreatePhoto;
use parish_db::models::popup::CreatePopup;
use parish_db::models::post::{CreatePost, UpdatePost};
use parish_db::models::priest::CreatePriest;
use parish_db::models::slide::CreateSlide;
use parish_db::repositories::{
    AlbumRepo, DonationRepo, PhotoRepo, PopupRepo, PostRepo, PriestRepo, SlideRepo,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_post(title: &str) -> CreatePost {
    CreatePost {
        title: title.to_string(),
        slug: None,
        excerpt: None,
        body: "corpo".to_string(),
        cover_image_url: None,
        is_active: None,
        published_at: None,
    }
}

fn new_album(title: &str) -> CreateAlbum {
    CreateAlbum {
        title: title.to_string(),
        description: None,
        cover_image_url: None,
        event_date: None,
    }
}

fn new_photo(url: &str) -> CreatePhoto {
    CreatePhoto {
        url: url.to_string(),
        caption: None,
    }
}

fn new_priest(name: &str) -> CreatePriest {
    CreatePriest {
        name: name.to_string(),
        title: None,
        bio: None,
        photo_url: None,
        is_active: None,
    }
}

fn new_donation(amount_cents: i64, status: &str) -> CreateDonation {
    CreateDonation {
        donor_name: None,
        donor_email: None,
        amount_cents,
        status: Some(status.to_string()),
        reference: None,
    }
}

// ---------------------------------------------------------------------------
// Posts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_create_and_find(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Aviso"), "aviso")
        .await
        .unwrap();
    assert!(post.is_active);
    assert_eq!(post.slug, "aviso");

    let found = PostRepo::find_by_slug(&pool, "aviso").await.unwrap().unwrap();
    assert_eq!(found.id, post.id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_slug_unique_violation(pool: PgPool) {
    PostRepo::create(&pool, &new_post("A"), "mesmo-slug")
        .await
        .unwrap();
    let err = PostRepo::create(&pool, &new_post("B"), "mesmo-slug")
        .await
        .unwrap_err();

    match err {
        sqlx::Error::Database(db_err) => {
            assert_eq!(db_err.code().as_deref(), Some("23505"));
            assert_eq!(db_err.constraint(), Some("uq_posts_slug"));
        }
        other => panic!("expected database error, got {other:?}"),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_partial_update_leaves_other_fields(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Original"), "original")
        .await
        .unwrap();

    let updated = PostRepo::update(
        &pool,
        post.id,
        &UpdatePost {
            title: Some("Editado".to_string()),
            slug: None,
            excerpt: None,
            body: None,
            cover_image_url: None,
            published_at: None,
        },
    )
    .await
    .unwrap()
    .unwrap();

    assert_eq!(updated.title, "Editado");
    assert_eq!(updated.slug, post.slug);
    assert_eq!(updated.body, post.body);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_toggle_flips_only_is_active(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Toggle"), "toggle")
        .await
        .unwrap();

    let toggled = PostRepo::toggle_active(&pool, post.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.title, post.title);
    assert_eq!(toggled.slug, post.slug);
    assert_eq!(toggled.body, post.body);
    assert_eq!(toggled.published_at, post.published_at);
    assert_eq!(toggled.created_at, post.created_at);

    let back = PostRepo::toggle_active(&pool, post.id)
        .await
        .unwrap()
        .unwrap();
    assert!(back.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_inactive_posts_hidden_from_default_list(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Oculto"), "oculto")
        .await
        .unwrap();
    PostRepo::toggle_active(&pool, post.id).await.unwrap();

    assert!(PostRepo::list(&pool, false).await.unwrap().is_empty());
    assert_eq!(PostRepo::list(&pool, true).await.unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_post_delete(pool: PgPool) {
    let post = PostRepo::create(&pool, &new_post("Some"), "some")
        .await
        .unwrap();
    assert!(PostRepo::delete(&pool, post.id).await.unwrap());
    assert!(!PostRepo::delete(&pool, post.id).await.unwrap());
    assert!(PostRepo::find_by_id(&pool, post.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Albums and photos
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_album_photo_hierarchy(pool: PgPool) {
    let album = AlbumRepo::create(&pool, &new_album("Festa Junina"))
        .await
        .unwrap();

    PhotoRepo::create(&pool, album.id, &new_photo("/media/albums/1.jpg"))
        .await
        .unwrap();
    PhotoRepo::create(&pool, album.id, &new_photo("/media/albums/2.jpg"))
        .await
        .unwrap();

    let photos = PhotoRepo::list_for_album(&pool, album.id).await.unwrap();
    assert_eq!(photos.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_album_delete_cascades_to_photos(pool: PgPool) {
    let album = AlbumRepo::create(&pool, &new_album("Cascata")).await.unwrap();
    let photo = PhotoRepo::create(&pool, album.id, &new_photo("/media/albums/x.jpg"))
        .await
        .unwrap();

    assert!(AlbumRepo::delete(&pool, album.id).await.unwrap());
    assert!(PhotoRepo::find_by_id(&pool, photo.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_album_update(pool: PgPool) {
    let album = AlbumRepo::create(&pool, &new_album("Antes")).await.unwrap();
    let updated = AlbumRepo::update(
        &pool,
        album.id,
        &UpdateAlbum {
            title: Some("Depois".to_string()),
            description: Some("desc".to_string()),
            cover_image_url: None,
            event_date: None,
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Depois");
    assert_eq!(updated.description.as_deref(), Some("desc"));
}

// ---------------------------------------------------------------------------
// Priests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_priest_crud(pool: PgPool) {
    let priest = PriestRepo::create(&pool, &new_priest("Pe. João"))
        .await
        .unwrap();
    assert!(priest.is_active);

    let listed = PriestRepo::list(&pool, false).await.unwrap();
    assert_eq!(listed.len(), 1);

    let toggled = PriestRepo::toggle_active(&pool, priest.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.name, priest.name);

    assert!(PriestRepo::delete(&pool, priest.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Popups
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_popup_toggle_flips_only_is_active(pool: PgPool) {
    let popup = PopupRepo::create(
        &pool,
        &CreatePopup {
            title: "Quermesse".to_string(),
            image_url: "/media/popups/q.jpg".to_string(),
            link_url: Some("/eventos/quermesse".to_string()),
            starts_on: None,
            ends_on: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    let toggled = PopupRepo::toggle_active(&pool, popup.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.title, popup.title);
    assert_eq!(toggled.image_url, popup.image_url);
    assert_eq!(toggled.link_url, popup.link_url);
    assert_eq!(toggled.starts_on, popup.starts_on);
    assert_eq!(toggled.ends_on, popup.ends_on);
    assert_eq!(toggled.created_at, popup.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_slide_toggle_leaves_order_index(pool: PgPool) {
    let slide = SlideRepo::create(
        &pool,
        &CreateSlide {
            title: "Bem-vindo".to_string(),
            subtitle: None,
            image_url: "/media/slides/b.jpg".to_string(),
            link_url: None,
            is_active: None,
        },
    )
    .await
    .unwrap();

    let toggled = SlideRepo::toggle_active(&pool, slide.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.is_active);
    assert_eq!(toggled.order_index, slide.order_index);
    assert_eq!(toggled.title, slide.title);
}

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donation_create_defaults_to_pending(pool: PgPool) {
    let donation = DonationRepo::create(
        &pool,
        &CreateDonation {
            donor_name: Some("Maria".to_string()),
            donor_email: None,
            amount_cents: 5000,
            status: None,
            reference: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(donation.status, "pending");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donation_status_check_constraint(pool: PgPool) {
    let err = DonationRepo::create(&pool, &new_donation(100, "refunded"))
        .await
        .unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donation_update_status(pool: PgPool) {
    let donation = DonationRepo::create(&pool, &new_donation(100, "pending"))
        .await
        .unwrap();
    let updated = DonationRepo::update_status(&pool, donation.id, "completed")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, "completed");
    assert_eq!(updated.amount_cents, 100);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_donations_list_newest_first(pool: PgPool) {
    DonationRepo::create(&pool, &new_donation(100, "completed"))
        .await
        .unwrap();
    DonationRepo::create(&pool, &new_donation(200, "pending"))
        .await
        .unwrap();

    let listed = DonationRepo::list(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].amount_cents, 200);
}

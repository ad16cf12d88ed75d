//! Seed the database with demo data for local development.

use rust_decimal::Decimal;
use secrecy::SecretString;

use pompom_boutique_core::ProductStatus;
use pompom_boutique_site::db::products::ProductRepository;
use pompom_boutique_site::db::{self, settings};
use pompom_boutique_site::models::{NewProduct, ShopSettings};

/// Insert demo products and default shop settings.
///
/// # Errors
///
/// Returns an error if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let database_url = SecretString::from(super::migrate::database_url()?);
    let pool = db::create_pool(&database_url).await?;

    let repo = ProductRepository::new(&pool);
    for product in demo_products() {
        let key = repo.insert(&product).await?;
        tracing::info!(%key, name = %product.name, "seeded product");
    }

    settings::save_settings(&pool, &demo_settings()).await?;
    tracing::info!("seeded shop settings");

    tracing::info!("Seed complete!");
    Ok(())
}

fn demo_products() -> Vec<NewProduct> {
    vec![
        NewProduct {
            name: "น้องโมจิ".to_owned(),
            description: "ปอมหน้าหมี ขนแน่น เข้าสังคมเก่ง".to_owned(),
            price: Decimal::from(18_000),
            discount_price: Some(Decimal::from(15_000)),
            status: ProductStatus::Available,
            breed: "ปอมเมอเรเนียน".to_owned(),
            gender: "เมีย".to_owned(),
            age: "3 เดือน".to_owned(),
            color: "ขาวครีม".to_owned(),
            eye_color: "ดำ".to_owned(),
            vaccine: "2 เข็ม".to_owned(),
            image_urls: Vec::new(),
        },
        NewProduct {
            name: "น้องลาเต้".to_owned(),
            description: "ตัวเล็ก ขี้อ้อน ชอบเล่นกับเด็ก".to_owned(),
            price: Decimal::from(12_000),
            discount_price: None,
            status: ProductStatus::Preordered,
            breed: "ปอมเมอเรเนียน".to_owned(),
            gender: "ผู้".to_owned(),
            age: "2 เดือน".to_owned(),
            color: "ส้ม".to_owned(),
            eye_color: "น้ำตาล".to_owned(),
            vaccine: "1 เข็ม".to_owned(),
            image_urls: Vec::new(),
        },
        NewProduct {
            name: "น้องมะขาม".to_owned(),
            description: "พี่ใหญ่ใจดี เลี้ยงง่าย".to_owned(),
            price: Decimal::from(9_500),
            discount_price: None,
            status: ProductStatus::Sold,
            breed: "ปอมเมอเรเนียน".to_owned(),
            gender: "ผู้".to_owned(),
            age: "5 เดือน".to_owned(),
            color: "น้ำตาล".to_owned(),
            eye_color: "ดำ".to_owned(),
            vaccine: "3 เข็ม".to_owned(),
            image_urls: Vec::new(),
        },
    ]
}

fn demo_settings() -> ShopSettings {
    ShopSettings {
        logo_text: Some("PomPom".to_owned()),
        shop_name: Some("ปอมปอม บูทีค".to_owned()),
        marquee_text: Some("ยินดีต้อนรับสู่ปอมปอม บูทีค น้องหมาสุขภาพดีทุกตัวค่ะ".to_owned()),
        cover_image_url: None,
        footer_text: Some("ปอมปอม บูทีค - เพื่อนขนปุยที่คุณไว้ใจ".to_owned()),
        contact_phone: Some("081-234-5678".to_owned()),
        contact_email: Some("hello@pompom-boutique.example".to_owned()),
        facebook_url: None,
        instagram_url: None,
        line_url: None,
    }
}

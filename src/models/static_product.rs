/// A hardcoded catalog entry used when the catalog runs without a fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticProduct {
    pub id: u32,
    pub name: &'static str,
    pub image: &'static str,
    pub diameter: &'static str,
    pub strength: &'static str,
    pub coating: &'static str,
    pub length: &'static str,
    pub price: &'static str,
    pub description: &'static str,
}

macro_rules! cdn_base {
    () => {
        "https://cdn.poehali.dev/projects/ba42c2d5-fea4-40bf-9a9b-fda98483b6d8/files/"
    };
}

macro_rules! cdn_image {
    ($file:literal) => {
        concat!(cdn_base!(), $file)
    };
}

pub static STATIC_PRODUCTS: [StaticProduct; 3] = [
    StaticProduct {
        id: 1,
        name: "Проволока оцинкованная 2.0 мм",
        image: cdn_image!("7bb3c08e-103d-498c-9e12-fbb457c9ff2d.jpg"),
        diameter: "2.0 мм",
        strength: "450-550 Н/мм²",
        coating: "Горячее цинкование",
        length: "500 м",
        price: "2 500 ₽",
        description: "Идеально подходит для электропастухов средней мощности. Высокая коррозионная стойкость.",
    },
    StaticProduct {
        id: 2,
        name: "Проволока оцинкованная 2.5 мм",
        image: cdn_image!("23bf99ad-9e43-428f-a2df-6a7fe6c85a00.jpg"),
        diameter: "2.5 мм",
        strength: "500-600 Н/мм²",
        coating: "Горячее цинкование",
        length: "500 м",
        price: "3 200 ₽",
        description: "Усиленная проволока для больших участков. Максимальная прочность и долговечность.",
    },
    StaticProduct {
        id: 3,
        name: "Проволока оцинкованная 1.6 мм",
        image: cdn_image!("7a007800-bfee-4650-b075-da543ce07540.jpg"),
        diameter: "1.6 мм",
        strength: "400-500 Н/мм²",
        coating: "Горячее цинкование",
        length: "500 м",
        price: "2 100 ₽",
        description: "Экономичный вариант для небольших загонов. Надежная защита вашего хозяйства.",
    },
];

pub fn static_products() -> &'static [StaticProduct] {
    &STATIC_PRODUCTS
}

/// Static lookup data backing the location selects and autocomplete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationCatalog {
    countries: Vec<String>,
    cities: Vec<CityEntry>,
    positions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CityEntry {
    name: String,
    districts: Vec<String>,
}

const TURKISH_DISTRICTS: &[(&str, &[&str])] = &[
    ("İstanbul", &["Kadıköy", "Beşiktaş", "Şişli", "Üsküdar", "Bakırköy"]),
    ("Ankara", &["Çankaya", "Keçiören", "Yenimahalle", "Mamak", "Sincan"]),
    ("İzmir", &["Balçova", "Bornova", "Karşıyaka", "Konak", "Buca"]),
    ("Bursa", &["Osmangazi", "Nilüfer", "Yıldırım", "Mudanya", "Gemlik"]),
];

const TURKISH_CITIES_WITHOUT_DISTRICTS: &[&str] = &[
    "Adana", "Antalya", "Konya", "Gaziantep", "Kayseri", "Mersin", "Eskişehir", "Samsun",
    "Trabzon", "Erzurum", "Malatya", "Sakarya", "Kocaeli", "Denizli", "Manisa", "Balıkesir",
];

const POPULAR_POSITIONS: &[&str] = &[
    "Yazılım Mühendisi",
    "Öğretmen",
    "Doktor",
    "Hemşire",
    "Avukat",
    "Mimar",
    "Mühendis",
    "Pazarlama Uzmanı",
    "Satış Temsilcisi",
    "Muhasebeci",
    "Finans Uzmanı",
    "İnsan Kaynakları Uzmanı",
    "Proje Yöneticisi",
    "Grafik Tasarımcı",
    "Veri Analisti",
    "İş Analisti",
    "Web Geliştirici",
    "Mobil Uygulama Geliştirici",
    "Sistem Yöneticisi",
    "Elektrik Mühendisi",
    "Makine Mühendisi",
    "İnşaat Mühendisi",
    "Çevirmen",
    "Editör",
    "Yönetici Asistanı",
    "Sekreter",
    "Müşteri Temsilcisi",
    "Depo Sorumlusu",
];

impl LocationCatalog {
    pub fn new(
        countries: Vec<String>,
        cities: Vec<(String, Vec<String>)>,
        positions: Vec<String>,
    ) -> Self {
        Self {
            countries,
            cities: cities
                .into_iter()
                .map(|(name, districts)| CityEntry { name, districts })
                .collect(),
            positions,
        }
    }

    /// The Turkish city/district table served by the job board.
    pub fn turkey() -> Self {
        let mut cities: Vec<(String, Vec<String>)> = TURKISH_DISTRICTS
            .iter()
            .map(|(city, districts)| {
                (
                    city.to_string(),
                    districts.iter().map(|d| d.to_string()).collect(),
                )
            })
            .collect();
        cities.extend(
            TURKISH_CITIES_WITHOUT_DISTRICTS
                .iter()
                .map(|city| (city.to_string(), Vec::new())),
        );
        Self::new(
            vec!["Türkiye".to_string()],
            cities,
            POPULAR_POSITIONS.iter().map(|p| p.to_string()).collect(),
        )
    }

    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.iter().map(|entry| entry.name.as_str())
    }

    /// Districts of `city`; empty for unknown cities and for the empty string.
    pub fn districts(&self, city: &str) -> &[String] {
        self.cities
            .iter()
            .find(|entry| entry.name == city)
            .map(|entry| entry.districts.as_slice())
            .unwrap_or(&[])
    }

    pub fn positions(&self) -> &[String] {
        &self.positions
    }
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::turkey()
    }
}

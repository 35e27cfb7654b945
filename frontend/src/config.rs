use log::Level;

pub const PAGE_TITLE: &str = "Portal Layanan Digital";
pub const PAGE_SUBTITLE: &str = "Biro Pengadaan Barang dan Jasa";
pub const ORGANIZATION: &str = "Setda Provinsi Kalimantan Barat";
pub const PROMPT: &str = "Silakan pilih layanan yang ingin Anda akses";

// Served from the site root by trunk / the static host.
pub const LOGO_PATH: &str = "/logo-kalbar.png";
pub const LOGO_ALT: &str = "Logo Provinsi Kalimantan Barat";

pub const COPYRIGHT_HOLDER: &str = "Pemerintah Provinsi Kalimantan Barat";
pub const RIGHTS_NOTICE: &str = "Semua hak dilindungi undang-undang";

pub const OPEN_SERVICE_LABEL: &str = "Buka Layanan";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose component logging when running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

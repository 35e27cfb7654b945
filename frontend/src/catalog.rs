//! The fixed list of procurement services shown on the portal.
//!
//! Entries are rendered in declaration order; the position of an entry is
//! also what sequences its entrance animation.

use std::time::Duration;

/// Offset added per catalog position before a card starts its entrance.
pub const STAGGER_STEP: Duration = Duration::from_millis(150);

/// Accent token a card is themed with. Shade values live in [`crate::theme`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccentColor {
    Blue,
    Green,
    Cyan,
    Pink,
    Purple,
    Teal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ServiceEntry {
    pub title: &'static str,
    /// Shown clamped to three lines on the card.
    pub description: &'static str,
    /// Absolute external URL, opened in a new tab.
    pub url: &'static str,
    pub icon: &'static str,
    pub color: AccentColor,
}

pub const SERVICES: &[ServiceEntry] = &[
    ServiceEntry {
        title: "BIRO PBJ",
        description: "Portal resmi Biro Pengadaan Barang dan Jasa Pemerintah Provinsi Kalimantan Barat",
        url: "https://pbj.kalbarprov.go.id",
        icon: "📋",
        color: AccentColor::Blue,
    },
    ServiceEntry {
        title: "LPSE",
        description: "Layanan Pengadaan Secara Elektronik Kalimantan Barat melalui platform INAPROC",
        url: "https://spse.inaproc.id/kalbarprov",
        icon: "🌐",
        color: AccentColor::Green,
    },
    ServiceEntry {
        title: "E-KATALOG V6",
        description: "Platform E-Katalog INAPROC untuk pengadaan barang dan jasa secara elektronik",
        url: "https://katalog.inaproc.id",
        icon: "📦",
        color: AccentColor::Cyan,
    },
    ServiceEntry {
        title: "TOKO DARING",
        description: "Platform Toko Daring INAPROC untuk belanja kebutuhan pengadaan secara online",
        url: "https://katalog.inaproc.id/toko-daring",
        icon: "🛒",
        color: AccentColor::Pink,
    },
    ServiceEntry {
        title: "SIPRAJA",
        description: "Sistem Informasi Pengadaan Barang dan Jasa (Review Paket)",
        url: "https://sipraja.kalbarprov.go.id",
        icon: "🏛️",
        color: AccentColor::Purple,
    },
    ServiceEntry {
        title: "SIP-SPSE",
        description: "Sistem Informasi Pelaporan Pengadaan Barang dan Jasa Secara Elektronik",
        url: "https://sip-spse.kalbarprov.go.id",
        icon: "💼",
        color: AccentColor::Teal,
    },
];

pub fn services() -> &'static [ServiceEntry] {
    SERVICES
}

/// Entrance delay for the card at `index`: `STAGGER_STEP * (index + 1)`.
pub fn stagger_delay(index: usize) -> Duration {
    let position = u32::try_from(index).unwrap_or(u32::MAX).saturating_add(1);
    STAGGER_STEP.saturating_mul(position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_keeps_declaration_order() {
        let titles: Vec<&str> = services().iter().map(|s| s.title).collect();
        assert_eq!(
            titles,
            vec!["BIRO PBJ", "LPSE", "E-KATALOG V6", "TOKO DARING", "SIPRAJA", "SIP-SPSE"]
        );
    }

    #[test]
    fn every_entry_is_complete() {
        for entry in services() {
            assert!(!entry.title.is_empty());
            assert!(!entry.description.is_empty());
            assert!(!entry.icon.is_empty());
            assert!(entry.url.starts_with("https://"), "{} is not absolute", entry.url);
        }
    }

    #[test]
    fn lpse_points_at_inaproc() {
        let lpse = services().iter().find(|s| s.title == "LPSE").unwrap();
        assert_eq!(lpse.url, "https://spse.inaproc.id/kalbarprov");
        assert_eq!(lpse.color, AccentColor::Green);
    }

    #[test]
    fn first_card_waits_one_step() {
        assert_eq!(stagger_delay(0), Duration::from_millis(150));
        assert_eq!(stagger_delay(5), Duration::from_millis(900));
    }

    #[test]
    fn stagger_delay_strictly_increases() {
        let delays: Vec<Duration> = (0..services().len() + 4).map(stagger_delay).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

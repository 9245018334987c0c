//! Cluster artwork, keyed by cluster display name

/// Shown for clusters without dedicated artwork
pub const FALLBACK_ARTWORK: &str =
    "https://demotywatory.pl/uploads/202009/1600031304_9uzd9g_fb_plus.jpg";

const ARTWORK: &[(&str, &str)] = &[
    (
        "Wodniacy z Wyższym Wykształceniem",
        "https://cdn.galleries.smcloud.net/t/galleries/gf-9aJ8-JFgW-3h9U_surfujace-psy-664x442-nocrop.jpg",
    ),
    (
        "Górscy Mędrcy",
        "https://img.freepik.com/premium-zdjecie/ultra-realistyczny-medrzec-medytuje-w-krajobrazie_9493-8521.jpg",
    ),
    (
        "Kociarze Górscy",
        "https://i.wpimg.pl/1280x/m.fotoblogia.pl/snow-leopard-sascha-fone-6b2e0e5.jpg",
    ),
    (
        "Leśni Filozofowie",
        "https://debogora.com/data/include/img/news/1671551739.jpg",
    ),
    (
        "Górscy Poszukiwacze Przygód",
        "https://brubeck.pl/wp-content/uploads/2024/03/piesze-wedrowki-po-gorach2.webp",
    ),
    (
        "Wodni Samotnicy",
        "https://upload.wikimedia.org/wikipedia/commons/0/0e/Jezioro_Wdzydze%2C_samotny_w%C4%99dkarz.jpg",
    ),
    (
        "Wodni Entuzjaści",
        "https://kitewyjazdy.pl/wp-content/uploads/2019/05/kite-surfing-at-Prasonisi-Rhodes.jpg",
    ),
    (
        "Wodni Psiarze",
        "https://cziko.com.pl/data/include/img/news/1680692347.jpg",
    ),
    (
        "Leśni Młodzi Odkrywcy",
        "https://bi.im-g.pl/im/3b/ce/13/z20769083IH,Dzieci-w-kanadyjskim-lesnym-przedszkolu-ForestKids.jpg",
    ),
];

/// Artwork URL for a cluster name
#[must_use]
pub fn artwork_for(cluster_name: &str) -> &'static str {
    ARTWORK
        .iter()
        .find(|(name, _)| *name == cluster_name)
        .map_or(FALLBACK_ARTWORK, |&(_, url)| url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_have_artwork() {
        assert!(artwork_for("Górscy Mędrcy").contains("medrzec"));
        assert!(artwork_for("Wodni Psiarze").starts_with("https://cziko.com.pl/"));
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(artwork_for("Kosmiczni Turyści"), FALLBACK_ARTWORK);
        assert_eq!(artwork_for(""), FALLBACK_ARTWORK);
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = ARTWORK.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ARTWORK.len());
    }
}

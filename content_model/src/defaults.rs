//! Compiled-in content the site ships with. Used to seed an empty store and as the
//! fallback whenever a stored record is missing or unreadable.

use crate::game::{Faction, FactionIcon, FeatureItem, GameData, ServerStatus};
use crate::news::NewsItem;

/// Picture used for news posts added without an image.
pub const NEWS_PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400/1a1a1a/amber?text=News";

/// The site copy as first published.
pub fn default_game_data() -> GameData {
    GameData {
        name: "TRIGLAV ONLINE".to_string(),
        slogan: "Командуй. Сражайся. Побеждай.".to_string(),
        tagline: "Стратегическая MMORPG".to_string(),
        description: "Управляйте героем, ведущим за собой отряд воинов. Исследуйте три мира \
славянской мифологии: Явь, Правь и Навь. Выберите одну из трёх великих фракций и участвуйте \
в эпическом противостоянии за господство на континенте Средиземье."
            .to_string(),
        full_description: "Станьте воином, ремесленником, строителем или собирателем. Вся \
экономика создаётся игроками - от простого меча до легендарных артефактов. В опасных чёрных \
зонах победитель забирает всё снаряжение поверженных врагов, создавая уникальную экономику \
без инфляции."
            .to_string(),
        features: vec![
            FeatureItem::new(
                "Экономика игроков",
                "Вся экономика управляется игроками. Создавайте оружие, броню, зелья и торгуйте на рынке.",
                "https://placehold.co/600x400/1a1a1a/amber?text=Economy",
            ),
            FeatureItem::new(
                "Чёрные зоны",
                "Опасные территории полного лута. Победитель забирает всё снаряжение поверженных врагов.",
                "https://placehold.co/600x400/1a1a1a/red?text=Black+Zones",
            ),
            FeatureItem::new(
                "Контроль территорий",
                "Захватывайте земли, стройте укрепления и сражайтесь за господство на континенте.",
                "https://placehold.co/600x400/1a1a1a/amber?text=Territory",
            ),
        ],
        factions: vec![
            faction(
                "arkon",
                "Империя Аркон",
                "Природная",
                FactionIcon::Leaf,
                "Эльфы, северные люди и оборотни живут в гармонии с природой, развивая свои \
духовные силы. Они защищают свой цветущий мир от тех, кто угрожает его существованию.",
                "emerald",
                600,
                "https://placehold.co/600x400/10b981/1a1a1a?text=Empire+Arkon",
            ),
            faction(
                "ssr",
                "Союз Свободных Республик",
                "Технократическая",
                FactionIcon::Cpu,
                "Мастера технологий, сращивающие плоть и механизмы. Искренне верят в свой путь \
развития и готовы 'просветить' другие расы. Устойчивы к ядам благодаря имплантам.",
                "amber",
                700,
                "https://placehold.co/600x400/92400e/1a1a1a?text=SSR",
            ),
            faction(
                "mgla",
                "Мгла",
                "Демоническая",
                FactionIcon::Skull,
                "Служители тёмных сил, черпающие мощь из демонических недр. Поклоняются золоту \
и власти, мастерски порабощают разум врагов и накладывают смертельные проклятия.",
                "purple",
                600,
                "https://placehold.co/600x400/7c3aed/1a1a1a?text=Mgla",
            ),
        ],
        screenshots: (1..=4)
            .map(|n| format!("https://placehold.co/1200x700/1a1a1a/amber?text=Screenshot+{n}"))
            .collect(),
        server_status: ServerStatus::Maintenance,
    }
}

/// The news feed as first published.
pub fn default_news() -> Vec<NewsItem> {
    vec![NewsItem {
        id: 1,
        title: "Анонс альфа-тестирования".to_string(),
        date: "15 декабря 2025".to_string(),
        preview: "Регистрация на закрытое альфа-тестирование открыта! Станьте первым, кто \
испытает TRIGLAV ONLINE."
            .to_string(),
        image: "https://placehold.co/600x400/1a1a1a/amber?text=Alpha+Test".to_string(),
    }]
}

/// Build a faction whose colour tokens all derive from one palette hue.
/// `shade` is the gradient start and border shade; the gradient ends 200 darker.
#[allow(clippy::too_many_arguments)]
fn faction(
    id: &str,
    name: &str,
    subtitle: &str,
    icon_name: FactionIcon,
    description: &str,
    hue: &str,
    shade: u32,
    image: &str,
) -> Faction {
    Faction {
        id: id.to_string(),
        name: name.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        color: format!("from-{hue}-{shade} to-{hue}-{}", shade + 200),
        border_color: format!("border-{hue}-{shade}"),
        text_color: format!("text-{hue}-400"),
        bg_color: format!("bg-{hue}-950/30"),
        image: image.to_string(),
        icon_name,
    }
}

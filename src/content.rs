use crate::types::{Category, Language, PostType, Role, User, HOME_SLUG};

/// One headline a category's posts are drawn from
#[derive(Debug, Clone, Copy)]
pub struct NewsTemplate {
    pub title: &'static str,
    pub language: Language,
    pub excerpt: &'static str,
    pub post_type: PostType,
}

impl NewsTemplate {
    pub const fn new(
        title: &'static str,
        language: Language,
        excerpt: &'static str,
        post_type: PostType,
    ) -> Self {
        Self {
            title,
            language,
            excerpt,
            post_type,
        }
    }
}

/// A category together with the templates its posts cycle through
#[derive(Debug, Clone)]
pub struct CategoryTemplates<'a> {
    pub category: Category,
    pub templates: &'a [NewsTemplate],
}

pub const IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1526304640581-d334cdbbf45e?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1495020689067-958852a7765e?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1523050854058-8df90110c9f1?w=800&h=500&fit=crop",
    "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=800&h=500&fit=crop",
];

pub const VIDEO_IDS: &[&str] = &["dQw4w9WgXcQ", "jNQXAC9IVRw", "9bZkp7q19f0", "kJQP7kiw5Fk"];
pub const AUDIO_IDS: &[&str] = &["ScMzIvxBSi4", "ZbZSe6N_BXs", "60ItHLz5WEA", "fJ9rUzIMcZQ"];

const BODY_TAIL: &str = "Full article content would go here with more details about the story.";

pub fn home_category() -> Category {
    Category::new(1, "Home", HOME_SLUG)
}

/// Full category list shown to readers, Home included
pub fn category_catalogue() -> Vec<Category> {
    vec![
        home_category(),
        Category::new(2, "Sri Lanka", "sri-lanka"),
        Category::new(3, "Political", "political"),
        Category::new(4, "Feature", "feature"),
        Category::new(5, "International", "international"),
        Category::new(6, "Other", "other"),
    ]
}

/// Categories that own posts, in generation order
pub fn news_tables() -> Vec<CategoryTemplates<'static>> {
    let tables: [&'static [NewsTemplate]; 5] = [SRI_LANKA, POLITICAL, FEATURE, INTERNATIONAL, OTHER];

    category_catalogue()
        .into_iter()
        .filter(|c| !c.is_home())
        .zip(tables)
        .map(|(category, templates)| CategoryTemplates {
            category,
            templates,
        })
        .collect()
}

pub fn body_for(excerpt: &str) -> String {
    format!("<p>{}</p><p>{}</p>", excerpt, BODY_TAIL)
}

/// One account per role for access-control testing
pub fn mock_users() -> Vec<User> {
    let user = |id, email: &str, password: &str, role, name: &str| User {
        id,
        email: email.to_string(),
        password: password.to_string(),
        role,
        name: name.to_string(),
    };

    vec![
        user(1, "superadmin@darkroom.lk", "admin123", Role::SuperAdmin, "Super Admin"),
        user(2, "admin@darkroom.lk", "admin123", Role::Admin, "Admin User"),
        user(3, "editor@darkroom.lk", "editor123", Role::Editor, "Editor User"),
        user(4, "user@darkroom.lk", "user123", Role::User, "Regular User"),
    ]
}

const SRI_LANKA: &[NewsTemplate] = &[
    NewsTemplate::new(
        "ශ්‍රී ලංකාවේ නව ආර්ථික ප්‍රතිසංස්කරණ ප්‍රකාශයට පත් කෙරේ",
        Language::Si,
        "රජය විසින් නව ආර්ථික ප්‍රතිසංස්කරණ පැකේජයක් ප්‍රකාශයට පත් කර ඇත.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "කොළඹ නගරයේ නව මාර්ග සංවර්ධන ව්‍යාපෘතිය ආරම්භ වේ",
        Language::Si,
        "කොළඹ නගරයේ තදබදය අවම කිරීම සඳහා නව මාර්ග සංවර්ධන ව්‍යාපෘතියක් ආරම්භ කර ඇත.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Sri Lanka Tourism Industry Shows Strong Recovery",
        Language::En,
        "The tourism sector reports a 45% increase in visitor arrivals this quarter.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "නව තාක්ෂණික උද්‍යාන සංකීර්ණය විවෘත කෙරේ",
        Language::Si,
        "රජය විසින් නව තාක්ෂණික උද්‍යාන සංකීර්ණයක් විවෘත කර ඇත.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Port City Colombo Development Reaches New Milestone",
        Language::En,
        "Major infrastructure projects completed ahead of schedule.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ශ්‍රී ලංකාවේ අපනයන ආදායම වැඩි වේ",
        Language::Si,
        "මෙම වසරේ අපනයන ආදායම 20%කින් වැඩි වී ඇත.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "New Railway Line Connecting North and South Opens",
        Language::En,
        "Historic railway connection improves transportation across the island.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "පාරිසරික සංරක්ෂණ ව්‍යාපෘති ආරම්භ වේ",
        Language::Si,
        "රජය විසින් නව පාරිසරික සංරක්ෂණ ව්‍යාපෘති මාලාවක් ආරම්භ කර ඇත.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Sri Lanka Wins International Award for Sustainable Development",
        Language::En,
        "Country recognized for environmental conservation efforts.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "නව රැකියා අවස්ථා 50,000ක් නිර්මාණය වේ",
        Language::Si,
        "ආර්ථික ප්‍රතිසංස්කරණ මගින් නව රැකියා අවස්ථා නිර්මාණය වී ඇත.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Digital Infrastructure Expansion Announced",
        Language::En,
        "Nationwide 5G network rollout to begin next quarter.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ශ්‍රී ලංකාව ආසියාතික ආර්ථික සමුළුව පවත්වයි",
        Language::Si,
        "කොළඹ නගරයේ ප්‍රධාන ආසියාතික ආර්ථික සමුළුව පැවැත්වේ.",
        PostType::Audio,
    ),
];

const POLITICAL: &[NewsTemplate] = &[
    NewsTemplate::new(
        "New Infrastructure Development Plan Unveiled",
        Language::En,
        "Government announces ambitious infrastructure development plan.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "Education Reform Bill Passes Parliament",
        Language::En,
        "Parliament passes comprehensive education reform bill.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "පාර්ලිමේන්තුව නව බදු ප්‍රතිසංස්කරණ අනුමත කරයි",
        Language::Si,
        "නව බදු ප්‍රතිසංස්කරණ පනත් කෙටුම්පත අනුමත කර ඇත.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "Opposition Proposes Alternative Economic Strategy",
        Language::En,
        "Opposition parties present comprehensive economic plan.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "ආණ්ඩුව නව සෞඛ්‍ය ප්‍රතිපත්ති ප්‍රකාශයට පත් කරයි",
        Language::Si,
        "රජය විසින් නව සෞඛ්‍ය ප්‍රතිපත්ති පැකේජයක් ප්‍රකාශයට පත් කර ඇත.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Parliament Debates Climate Change Legislation",
        Language::En,
        "New environmental protection laws under consideration.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "නව අධිකරණ ප්‍රතිසංස්කරණ යෝජනා කෙරේ",
        Language::Si,
        "අධිකරණ පද්ධතිය නවීකරණය කිරීම සඳහා යෝජනා ඉදිරිපත් කර ඇත.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Government Announces Anti-Corruption Measures",
        Language::En,
        "New transparency initiatives launched to combat corruption.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "පළාත් සභා ප්‍රතිසංස්කරණ පනත් කෙටුම්පත ඉදිරිපත් වේ",
        Language::Si,
        "පළාත් සභා පද්ධතිය ශක්තිමත් කිරීම සඳහා නව පනත් කෙටුම්පතක් ඉදිරිපත් කර ඇත.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Coalition Government Reaches Agreement on Budget",
        Language::En,
        "Major political parties agree on national budget priorities.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "නව ඡන්ද ප්‍රතිසංස්කරණ යෝජනා කෙරේ",
        Language::Si,
        "ඡන්ද පද්ධතිය නවීකරණය කිරීම සඳහා යෝජනා ඉදිරිපත් වී ඇත.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Parliament Approves Constitutional Amendment",
        Language::En,
        "Historic constitutional changes passed with bipartisan support.",
        PostType::Article,
    ),
];

const FEATURE: &[NewsTemplate] = &[
    NewsTemplate::new(
        "පාරිසරික සංරක්ෂණය සඳහා නව ව්‍යාපෘති ආරම්භ වේ",
        Language::Si,
        "රජය විසින් පාරිසරික සංරක්ෂණය සඳහා නව ව්‍යාපෘති මාලාවක් ආරම්භ කර ඇත.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "The Rise of Sustainable Agriculture in Rural Communities",
        Language::En,
        "Farmers embrace eco-friendly farming practices with remarkable results.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "සංස්කෘතික උරුමය සුරැකීමේ නව මුලපිරීම",
        Language::Si,
        "පුරාවිද්‍යා දෙපාර්තමේන්තුව විසින් සංස්කෘතික උරුමය සුරැකීමේ නව වැඩසටහනක් ආරම්භ කර ඇත.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Women Entrepreneurs Transform Local Economy",
        Language::En,
        "Success stories of women-led businesses inspiring communities.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "තරුණ නවෝත්පාදකයින් තාක්ෂණික විසඳුම් නිර්මාණය කරති",
        Language::Si,
        "තරුණ තරුණියන් විසින් නව තාක්ෂණික විසඳුම් නිර්මාණය කර ඇත.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Traditional Crafts Experience Modern Revival",
        Language::En,
        "Ancient art forms find new life through contemporary adaptations.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "අධ්‍යාපන ක්ෂේත්‍රයේ නව්‍ය ප්‍රවේශයන්",
        Language::Si,
        "ගුරුවරුන් විසින් නව්‍ය අධ්‍යාපන ක්‍රම භාවිතා කරති.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Community-Led Conservation Efforts Show Promising Results",
        Language::En,
        "Local initiatives protect endangered species and habitats.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ග්‍රාමීය සංවර්ධනයේ සාර්ථක කථා",
        Language::Si,
        "ග්‍රාමීය ප්‍රජාවන් සංවර්ධනය සඳහා නව මාර්ග සොයයි.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Digital Literacy Programs Transform Education",
        Language::En,
        "Technology integration improves learning outcomes nationwide.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "සෞඛ්‍ය සේවා ක්ෂේත්‍රයේ නව්‍යකරණ",
        Language::Si,
        "සෞඛ්‍ය සේවා ක්ෂේත්‍රයේ නව තාක්ෂණික ප්‍රගතිය.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Youth-Led Social Enterprises Making Impact",
        Language::En,
        "Young entrepreneurs address social challenges through business.",
        PostType::Article,
    ),
];

const INTERNATIONAL: &[NewsTemplate] = &[
    NewsTemplate::new(
        "International Trade Summit Concludes with Major Agreements",
        Language::En,
        "Multiple bilateral trade agreements signed between nations.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "Global Climate Conference Reaches Historic Agreement",
        Language::En,
        "World leaders commit to ambitious carbon reduction targets.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "ආසියා පැසිෆික් කලාපයේ ආර්ථික වර්ධනය වේගවත් වේ",
        Language::Si,
        "කලාපීය ආර්ථික වර්ධනය අපේක්ෂිත මට්ටම් ඉක්මවයි.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "UN Security Council Addresses Regional Conflicts",
        Language::En,
        "International community seeks peaceful resolutions.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ජාත්‍යන්තර තාක්ෂණික සමුළුව සාර්ථකව අවසන් වේ",
        Language::Si,
        "ප්‍රධාන තාක්ෂණික සමුළුව නව සහයෝගීතා ඇති කරයි.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Global Health Organization Launches New Initiative",
        Language::En,
        "Worldwide vaccination program aims to eradicate diseases.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ජාත්‍යන්තර ක්‍රීඩා උළෙල සඳහා සූදානම",
        Language::Si,
        "ප්‍රධාන ජාත්‍යන්තර ක්‍රීඩා උළෙල සඳහා සූදානම් කටයුතු ආරම්භ වේ.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "World Economic Forum Discusses Future of Work",
        Language::En,
        "Leaders debate automation and employment challenges.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ජාත්‍යන්තර අධ්‍යාපන සමුළුව පවත්වයි",
        Language::Si,
        "අධ්‍යාපන ප්‍රතිසංස්කරණ පිළිබඳ ජාත්‍යන්තර සංවාදය.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "International Space Agency Announces Mars Mission",
        Language::En,
        "Historic space exploration project receives global support.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ජාත්‍යන්තර සංගීත උළෙල සාර්ථකව පවත්වයි",
        Language::Si,
        "ලෝක ප්‍රසිද්ධ කලාකරුවන් සහභාගී වූ සංගීත උළෙල.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Global Trade Organization Reports Economic Growth",
        Language::En,
        "International trade volumes reach record highs.",
        PostType::Article,
    ),
];

const OTHER: &[NewsTemplate] = &[
    NewsTemplate::new(
        "නව තාක්ෂණික නවෝත්පාදන ප්‍රදර්ශනය",
        Language::Si,
        "නවීන තාක්ෂණික නවෝත්පාදන ප්‍රදර්ශනය පැවැත්වේ.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "Local Food Festival Celebrates Culinary Diversity",
        Language::En,
        "Traditional and modern cuisines showcase cultural heritage.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "ක්‍රීඩා තරඟාවලිය සාර්ථකව අවසන් වේ",
        Language::Si,
        "ජාතික ක්‍රීඩා තරඟාවලිය විශිෂ්ට ලෙස සම්පූර්ණ වේ.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Art Exhibition Features Contemporary Local Artists",
        Language::En,
        "Emerging artists gain recognition through major showcase.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "සංගීත උළෙල දහස් ගණනක් ආකර්ෂණය කරයි",
        Language::Si,
        "ජාතික සංගීත උළෙල විශාල ජනප්‍රියත්වයක් ලබයි.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Science Fair Highlights Student Innovation",
        Language::En,
        "Young scientists present groundbreaking research projects.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "පොත් ප්‍රදර්ශනය සාහිත්‍ය ප්‍රේමීන් ආකර්ෂණය කරයි",
        Language::Si,
        "වාර්ෂික පොත් ප්‍රදර්ශනය විශාල සාර්ථකත්වයක් ලබයි.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Film Festival Showcases Independent Cinema",
        Language::En,
        "Local filmmakers receive international recognition.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "ක්‍රීඩා පුහුණු මධ්‍යස්ථානය විවෘත කෙරේ",
        Language::Si,
        "නව ක්‍රීඩා පුහුණු මධ්‍යස්ථානය තරුණයින් සඳහා විවෘත වේ.",
        PostType::Video,
    ),
    NewsTemplate::new(
        "Fashion Week Highlights Local Design Talent",
        Language::En,
        "Designers present innovative collections to global audience.",
        PostType::Article,
    ),
    NewsTemplate::new(
        "සෞඛ්‍ය දැනුවත් කිරීමේ වැඩසටහන ආරම්භ වේ",
        Language::Si,
        "ජනතාව සෞඛ්‍ය දැනුවත් කිරීම සඳහා නව වැඩසටහනක්.",
        PostType::Audio,
    ),
    NewsTemplate::new(
        "Technology Expo Attracts Thousands of Visitors",
        Language::En,
        "Latest innovations in tech showcased at annual event.",
        PostType::Article,
    ),
];
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_has_home_first() {
        let catalogue = category_catalogue();
        assert_eq!(catalogue.len(), 6);
        assert_eq!(catalogue[0].id, 1);
        assert!(catalogue[0].is_home());
    }

    #[test]
    fn test_news_tables_skip_home() {
        let tables = news_tables();
        let names: Vec<_> = tables.iter().map(|t| t.category.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Sri Lanka", "Political", "Feature", "International", "Other"]
        );
        assert!(tables.iter().all(|t| t.templates.len() == 12));
    }

    #[test]
    fn test_body_wraps_excerpt() {
        assert_eq!(
            body_for("Hello."),
            "<p>Hello.</p><p>Full article content would go here with more details about the story.</p>"
        );
    }

    #[test]
    fn test_one_user_per_role() {
        let users = mock_users();
        let roles: Vec<_> = users.iter().map(|u| u.role).collect();
        assert_eq!(
            roles,
            vec![Role::SuperAdmin, Role::Admin, Role::Editor, Role::User]
        );
    }
}

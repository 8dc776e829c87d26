//! Static Sections
//!
//! Content of the informational parts of the page. Nothing here reads
//! data; every section renders the same markup on every request.

use std::fmt::Write;

use super::html::{escape, link_target};

/// Product name shown in the header and footer
pub const PRODUCT_NAME: &str = "AI Healthcare Hub";

pub const DIAGNOSIS_URL: &str = "https://ai-healthcare-hub.onrender.com/";
pub const WELLNESS_URL: &str =
    "https://ai-healthcare-hub-saurav.netlify.app/mental%20wellness/index.html";
pub const DONATION_URL: &str = "https://ai-healthcare-hub-saurav.netlify.app/main.html";
pub const GITHUB_URL: &str = "https://github.com/SauravMukherjee44/AI-HealthCare-Hub";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sauravmukherjee44/";
pub const CONTACT_EMAIL: &str = "sauravmukherjee928@gmail.com";

/// An in-page or outbound navigation entry
#[derive(Debug, Clone, Copy)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", href: "#home" },
    NavLink { name: "Portals", href: "#portals" },
    NavLink { name: "Features", href: "#features" },
    NavLink { name: "Monitoring", href: "#monitoring" },
    NavLink { name: "Creator", href: "#creator" },
    NavLink { name: "Contact", href: "#contact" },
];

/// A card linking to one of the sub-applications
#[derive(Debug, Clone, Copy)]
pub struct Portal {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const PORTALS: &[Portal] = &[
    Portal {
        title: "Disease Diagnosis",
        description: "AI-powered disease prediction using TensorFlow and Keras. Input symptoms and get instant predictions with machine learning models.",
        icon: "🧠",
        gradient: "from-blue-500 to-cyan-500",
        image: "https://images.pexels.com/photos/5327585/pexels-photo-5327585.jpeg?auto=compress&cs=tinysrgb&w=800",
        link: DIAGNOSIS_URL,
    },
    Portal {
        title: "Mental Wellness",
        description: "Mental health support and counseling resources. Connect with resources and track your wellness journey.",
        icon: "💗",
        gradient: "from-pink-500 to-rose-500",
        image: "https://images.pexels.com/photos/3759657/pexels-photo-3759657.jpeg?auto=compress&cs=tinysrgb&w=800",
        link: WELLNESS_URL,
    },
    Portal {
        title: "Healthcare Donation",
        description: "Support healthcare initiatives and help others. A platform connecting donors with those in need of medical assistance.",
        icon: "💵",
        gradient: "from-green-500 to-emerald-500",
        image: "https://images.pexels.com/photos/6647019/pexels-photo-6647019.jpeg?auto=compress&cs=tinysrgb&w=800",
        link: DONATION_URL,
    },
    Portal {
        title: "Health Monitoring",
        description: "Real-time health tracking using edge computing. Monitor vitals and health metrics with personalized insights.",
        icon: "📈",
        gradient: "from-orange-500 to-amber-500",
        image: "https://images.pexels.com/photos/4386467/pexels-photo-4386467.jpeg?auto=compress&cs=tinysrgb&w=800",
        link: "#monitoring",
    },
];

/// A platform capability shown in the features grid
#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: "⚡",
        title: "Real-time Analysis",
        description: "Get instant health insights powered by edge computing and advanced AI algorithms.",
    },
    Feature {
        icon: "🛡",
        title: "Secure & Private",
        description: "Your health data is encrypted and protected with blockchain technology.",
    },
    Feature {
        icon: "🌐",
        title: "Global Access",
        description: "Access healthcare solutions from anywhere in the world, anytime you need.",
    },
    Feature {
        icon: "⏰",
        title: "24/7 Availability",
        description: "Our AI-powered platform is always available to assist you with health concerns.",
    },
    Feature {
        icon: "📊",
        title: "Predictive Analytics",
        description: "Machine learning models that predict health risks before they become serious.",
    },
    Feature {
        icon: "👥",
        title: "Expert Network",
        description: "Connect with healthcare professionals and counselors for personalized support.",
    },
];

/// Icon, title and blurb; used by the hero, about and creator sections
#[derive(Debug, Clone, Copy)]
struct Highlight {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
}

const HERO_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "🧠", title: "AI Diagnosis", text: "Machine learning powered disease prediction" },
    Highlight { icon: "🖥", title: "Smart Analytics", text: "Real-time health data processing" },
    Highlight { icon: "📈", title: "Health Monitoring", text: "Track your health metrics continuously" },
];

const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "💻", title: "Machine Learning", text: "TensorFlow and Keras models for disease prediction and health analytics" },
    Highlight { icon: "🗄", title: "Data Processing", text: "Advanced data analytics and pattern recognition for health insights" },
    Highlight { icon: "🖥", title: "Edge Computing", text: "Real-time health monitoring with efficient edge computing architecture" },
];

const CREATOR_HIGHLIGHTS: &[Highlight] = &[
    Highlight { icon: "💻", title: "Technical Expertise", text: "Machine Learning, AI, Full-Stack Development" },
    Highlight { icon: "💼", title: "Mission", text: "Making healthcare accessible through AI innovation" },
    Highlight { icon: "🎓", title: "Focus Areas", text: "Healthcare AI, Disease Prediction, Mental Wellness" },
];

pub fn navigation() -> String {
    let mut links = String::new();
    for link in NAV_LINKS {
        let _ = write!(
            links,
            r#"<a href="{}" class="text-gray-700 hover:text-blue-600 font-medium">{}</a>"#,
            link.href, link.name
        );
    }

    format!(
        r##"<nav class="fixed top-0 left-0 right-0 z-50 bg-white/95 backdrop-blur-sm shadow-sm">
  <div class="max-w-7xl mx-auto px-4 flex justify-between items-center h-16">
    <a href="#home" class="flex items-center space-x-2">
      <span class="w-10 h-10 bg-gradient-to-br from-blue-500 to-cyan-500 rounded-lg flex items-center justify-center text-white">♥</span>
      <span class="text-xl font-bold text-blue-600">{name}</span>
    </a>
    <details class="md:hidden"><summary class="p-2 cursor-pointer">☰</summary><div class="absolute left-0 right-0 bg-white border-t px-4 py-4 flex flex-col space-y-3">{links}</div></details>
    <div class="hidden md:flex items-center space-x-8">{links}<a href="#portals" class="px-6 py-2 bg-gradient-to-r from-blue-600 to-cyan-600 text-white rounded-lg">Try Now</a></div>
  </div>
</nav>"##,
        name = PRODUCT_NAME,
        links = links,
    )
}

pub fn hero() -> String {
    format!(
        r##"<section id="home" class="pt-32 pb-16 px-4 bg-gradient-to-b from-white to-blue-50">
  <div class="max-w-7xl mx-auto text-center">
    <h2 class="text-3xl font-bold text-gray-900">{name}</h2>
    <p class="text-sm text-gray-600 mb-8">Intelligent Healthcare Solutions</p>
    <h1 class="text-5xl md:text-6xl font-bold text-gray-900 mb-6">AI-Based Healthcare Platform</h1>
    <p class="text-xl text-gray-600 max-w-3xl mx-auto mb-12">Leveraging machine learning and artificial intelligence to provide disease prediction, mental wellness support, health monitoring, and personalized healthcare insights.</p>
    <div class="flex flex-wrap justify-center gap-4 mb-16">
      <a href="#portals" class="px-8 py-3 bg-gradient-to-r from-blue-600 to-cyan-600 text-white rounded-lg font-medium">Try Diagnosis</a>
      <a href="#features" class="px-8 py-3 bg-white border-2 border-gray-300 text-gray-700 rounded-lg font-medium">Explore Features</a>
    </div>
    <div class="grid grid-cols-1 sm:grid-cols-3 gap-8 max-w-4xl mx-auto">{highlights}</div>
  </div>
</section>"##,
        name = PRODUCT_NAME,
        highlights = highlight_cards(HERO_HIGHLIGHTS, "bg-white rounded-xl p-6 shadow-md"),
    )
}

pub fn portals() -> String {
    let mut cards = String::new();
    for portal in PORTALS {
        let _ = write!(
            cards,
            r#"<a href="{link}"{target} class="group relative bg-white rounded-2xl shadow-lg overflow-hidden block">
  <div class="relative h-48 overflow-hidden">
    <div class="absolute inset-0 bg-gradient-to-br {gradient} opacity-90"></div>
    <img src="{image}" alt="{title}" class="w-full h-full object-cover">
    <div class="absolute inset-0 flex items-center justify-center"><span class="w-16 h-16 bg-white rounded-2xl shadow-lg flex items-center justify-center text-3xl">{icon}</span></div>
  </div>
  <div class="p-6">
    <h3 class="text-2xl font-bold text-gray-900 mb-3">{title}</h3>
    <p class="text-gray-600 mb-4">{description}</p>
    <span class="text-blue-600 font-medium">Explore Portal →</span>
  </div>
</a>"#,
            link = portal.link,
            target = link_target(portal.link),
            gradient = portal.gradient,
            image = escape(portal.image),
            title = portal.title,
            icon = portal.icon,
            description = portal.description,
        );
    }

    format!(
        r#"<section id="portals" class="py-20 px-4 bg-white">
  <div class="max-w-7xl mx-auto">
    <div class="text-center mb-16">
      <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">Healthcare Portals</h2>
      <p class="text-xl text-gray-600">Access AI-powered healthcare solutions through these dedicated portals</p>
    </div>
    <div class="grid md:grid-cols-2 gap-8">{cards}</div>
  </div>
</section>"#
    )
}

pub fn features() -> String {
    let mut cards = String::new();
    for feature in FEATURES {
        let _ = write!(
            cards,
            r#"<div class="bg-white rounded-xl p-6 shadow-md"><div class="w-12 h-12 bg-gradient-to-br from-blue-500 to-cyan-500 rounded-lg flex items-center justify-center mb-4 text-white">{}</div><h3 class="text-xl font-bold text-gray-900 mb-2">{}</h3><p class="text-gray-600">{}</p></div>"#,
            feature.icon,
            escape(feature.title),
            feature.description
        );
    }

    format!(
        r#"<section id="features" class="py-20 px-4 bg-gradient-to-br from-gray-50 to-blue-50">
  <div class="max-w-7xl mx-auto">
    <div class="text-center mb-16">
      <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">Platform Features</h2>
      <p class="text-xl text-gray-600">Key capabilities of this AI-powered healthcare platform</p>
    </div>
    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>
  </div>
</section>"#
    )
}

pub fn about() -> String {
    format!(
        r#"<section id="about" class="py-20 px-4 bg-white">
  <div class="max-w-7xl mx-auto">
    <div class="text-center mb-12">
      <h2 class="text-4xl md:text-5xl font-bold text-gray-900 mb-4">About This Project</h2>
      <p class="text-xl text-gray-600 max-w-3xl mx-auto">{name} is a personal project exploring the intersection of artificial intelligence and healthcare through practical applications</p>
    </div>
    <div class="grid md:grid-cols-2 gap-12 items-center mb-16">
      <div>
        <h3 class="text-2xl font-bold text-gray-900 mb-4">Project Overview</h3>
        <p class="text-gray-600 mb-4">This platform demonstrates how machine learning and AI can be applied to healthcare challenges. From disease prediction to mental wellness support, each feature showcases different aspects of AI implementation in healthcare.</p>
        <p class="text-gray-600">The project integrates various technologies including TensorFlow for disease prediction models, edge computing for real-time health monitoring, and personalized algorithms for wellness tracking.</p>
      </div>
      <div class="space-y-4">{highlights}</div>
    </div>
    <div class="bg-gradient-to-br from-gray-50 to-blue-50 rounded-2xl p-8 text-center">
      <h3 class="text-2xl font-bold text-gray-900 mb-4">Open Source Project</h3>
      <p class="text-gray-600 max-w-2xl mx-auto mb-6">This project is open source and available on GitHub. Feel free to explore the code, contribute improvements, or use it as a learning resource for your own AI healthcare projects.</p>
      <a href="{github}"{target} class="inline-block px-8 py-3 bg-gradient-to-r from-blue-600 to-cyan-600 text-white rounded-lg font-medium">View on GitHub</a>
    </div>
  </div>
</section>"#,
        name = PRODUCT_NAME,
        highlights = highlight_cards(ABOUT_HIGHLIGHTS, "bg-gradient-to-br from-blue-50 to-cyan-50 rounded-xl p-6"),
        github = GITHUB_URL,
        target = link_target(GITHUB_URL),
    )
}

pub fn creator() -> String {
    format!(
        r#"<section id="creator" class="py-20 px-4 bg-gradient-to-br from-gray-50 to-blue-50">
  <div class="max-w-7xl mx-auto">
    <div class="text-center mb-16">
      <h2 class="text-4xl font-bold text-gray-900 mb-4">Meet the Creator</h2>
      <p class="text-xl text-gray-600">The mind behind {name}</p>
    </div>
    <div class="bg-white rounded-3xl shadow-2xl overflow-hidden grid md:grid-cols-2">
      <div class="bg-gradient-to-br from-blue-600 to-cyan-600 p-12 flex items-center justify-center">
        <img src="/saurav_pic.jpeg" alt="Saurav Mukherjee" class="w-64 h-64 rounded-full object-cover border-8 border-white shadow-2xl">
      </div>
      <div class="p-12 flex flex-col justify-center">
        <h3 class="text-3xl font-bold text-gray-900 mb-2">Saurav Mukherjee</h3>
        <p class="text-lg text-blue-600 font-medium mb-6">AI &amp; Healthcare Technology Enthusiast</p>
        <p class="text-gray-600 mb-8">A passionate developer and innovator dedicated to leveraging artificial intelligence and machine learning to transform healthcare accessibility. With a vision to democratize healthcare through technology, Saurav has created this comprehensive platform that combines disease prediction, mental wellness support, and healthcare donation systems.</p>
        <div class="space-y-4 mb-8">{highlights}</div>
        <div class="flex flex-wrap gap-4">
          <a href="mailto:{email}" class="px-6 py-3 bg-gradient-to-r from-blue-600 to-cyan-600 text-white rounded-lg">Email Me</a>
          <a href="{linkedin}"{external} class="px-6 py-3 bg-blue-700 text-white rounded-lg">LinkedIn</a>
          <a href="{github}"{external} class="px-6 py-3 bg-gray-800 text-white rounded-lg">GitHub</a>
        </div>
      </div>
    </div>
  </div>
</section>"#,
        name = PRODUCT_NAME,
        highlights = highlight_cards(CREATOR_HIGHLIGHTS, "flex items-start space-x-3"),
        email = CONTACT_EMAIL,
        linkedin = LINKEDIN_URL,
        github = GITHUB_URL,
        external = link_target(GITHUB_URL),
    )
}

pub fn footer(year: i32) -> String {
    let nav: String = [("Home", "#home"), ("Portals", "#portals"), ("Features", "#features"), ("About", "#about")]
        .iter()
        .map(|(name, href)| format!(r#"<li><a href="{}" class="hover:text-blue-400">{}</a></li>"#, href, name))
        .collect();

    let portals: String = PORTALS
        .iter()
        .map(|p| {
            format!(
                r#"<li><a href="{}"{} class="hover:text-blue-400">{}</a></li>"#,
                p.link,
                link_target(p.link),
                p.title
            )
        })
        .collect();

    format!(
        r#"<footer id="contact" class="bg-gray-900 text-gray-300">
  <div class="max-w-7xl mx-auto px-4 py-12">
    <div class="grid md:grid-cols-3 gap-8 mb-8">
      <div>
        <p class="text-xl font-bold text-white mb-4">♥ {name}</p>
        <p class="text-gray-400">An AI-powered healthcare platform leveraging machine learning for disease prediction, mental wellness support, and personalized healthcare insights.</p>
      </div>
      <div><h3 class="text-white font-semibold mb-4">Navigation</h3><ul class="space-y-2">{nav}</ul></div>
      <div><h3 class="text-white font-semibold mb-4">Portals</h3><ul class="space-y-2">{portals}</ul></div>
    </div>
    <div class="border-t border-gray-800 pt-8 flex flex-col md:flex-row justify-between items-center gap-4">
      <p class="text-gray-400 text-sm">{year} {name}. A personal healthcare project.</p>
      <div class="flex items-center space-x-4 text-sm">
        <a href="mailto:{email}" class="text-gray-400 hover:text-blue-400">Get in touch</a>
        <a href="{linkedin}"{external} class="hover:text-blue-400">LinkedIn</a>
        <a href="{github}"{external} class="hover:text-blue-400">GitHub</a>
      </div>
    </div>
  </div>
</footer>"#,
        name = PRODUCT_NAME,
        year = year,
        email = CONTACT_EMAIL,
        linkedin = LINKEDIN_URL,
        github = GITHUB_URL,
        external = link_target(GITHUB_URL),
    )
}

fn highlight_cards(items: &[Highlight], class: &str) -> String {
    items
        .iter()
        .map(|h| {
            format!(
                r#"<div class="{}"><span class="text-2xl">{}</span><div><h4 class="font-bold text-gray-900 mb-2">{}</h4><p class="text-sm text-gray-600">{}</p></div></div>"#,
                class, h.icon, h.title, h.text
            )
        })
        .collect()
}

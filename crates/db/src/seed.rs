//! Demo catalog inserted into empty tables on first start.

use sqlx::SqlitePool;
use tracing::info;

use crate::models::{
    post::{Post, PostPayload},
    product::{Product, ProductPayload},
    project::{Project, ProjectPayload},
};

/// Rows inserted into each table by [`seed_if_empty`]. Zero means the table
/// already held content and was left alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub products: usize,
    pub posts: usize,
    pub projects: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.products == 0 && self.posts == 0 && self.projects == 0
    }
}

struct ProductSeed {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    icon: &'static str,
    features: &'static [&'static str],
}

struct PostSeed {
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    category: &'static str,
    icon: &'static str,
}

struct ProjectSeed {
    name: &'static str,
    description: &'static str,
    category: &'static str,
    icon: &'static str,
    technologies: &'static [&'static str],
    client: &'static str,
}

const SEED_AUTHOR: &str = "GenZ Smart Team";

static PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "SmartFlow Pro",
        description: "All-in-one workflow automation platform that streamlines your business processes and boosts productivity.",
        category: "saas",
        icon: "🚀",
        features: &["Automated Workflows", "Real-time Analytics", "Team Collaboration", "Enterprise Security"],
    },
    ProductSeed {
        name: "AI Assist",
        description: "Intelligent virtual assistant powered by cutting-edge machine learning algorithms.",
        category: "ai",
        icon: "🤖",
        features: &["Natural Language Processing", "24/7 Availability", "Custom Training", "Multi-language Support"],
    },
    ProductSeed {
        name: "DataVision",
        description: "AI-powered analytics and business intelligence platform for data-driven decisions.",
        category: "saas",
        icon: "📊",
        features: &["Real-time Dashboards", "Predictive Analytics", "Custom Reports", "Data Integration"],
    },
    ProductSeed {
        name: "TaskMaster",
        description: "Cross-platform mobile application for efficient task and project management.",
        category: "mobile",
        icon: "📱",
        features: &["Task Management", "Team Collaboration", "Time Tracking", "Offline Mode"],
    },
    ProductSeed {
        name: "SecureShield",
        description: "Enterprise-grade security solutions to protect your digital assets.",
        category: "web",
        icon: "🔒",
        features: &["Threat Detection", "Encryption", "Access Control", "Security Audits"],
    },
    ProductSeed {
        name: "WebBuilder",
        description: "Drag-and-drop website builder with advanced customization options.",
        category: "web",
        icon: "🌐",
        features: &["Drag & Drop", "Responsive Design", "SEO Tools", "E-commerce Ready"],
    },
];

static POSTS: &[PostSeed] = &[
    PostSeed {
        title: "The Future of AI in Business: Trends to Watch in 2026",
        content: "Artificial Intelligence continues to reshape the business landscape. In this comprehensive guide, we explore the key AI trends that will define 2026 and how businesses can leverage them for competitive advantage. From generative AI to autonomous systems, the possibilities are endless.",
        excerpt: "Exploring how artificial intelligence is transforming industries and creating new opportunities.",
        category: "ai",
        icon: "🤖",
    },
    PostSeed {
        title: "Building a Tech Startup in 2026",
        content: "Starting a tech company has never been more exciting or challenging. This article covers everything from finding your niche to scaling your team. Learn from our experience and avoid common pitfalls.",
        excerpt: "Key insights and strategies for aspiring entrepreneurs in the rapidly evolving tech landscape.",
        category: "entrepreneurship",
        icon: "🚀",
    },
    PostSeed {
        title: "Cloud Migration Best Practices",
        content: "Moving to the cloud is a major decision for any business. This guide covers the essential steps for a successful migration, from planning to execution.",
        excerpt: "A comprehensive guide to successfully migrating your infrastructure to the cloud.",
        category: "technology",
        icon: "☁️",
    },
    PostSeed {
        title: "Cybersecurity Trends to Watch",
        content: "Stay ahead of emerging threats with these essential cybersecurity insights. Learn about zero-trust architecture, AI-powered security, and more.",
        excerpt: "Stay ahead of emerging threats with these essential cybersecurity insights.",
        category: "technology",
        icon: "🔒",
    },
    PostSeed {
        title: "Innovation Strategies That Work",
        content: "Innovation is not just about having great ideas. It is about creating a culture that nurtures creativity and turns ideas into reality.",
        excerpt: "Proven approaches to fostering innovation and creativity in your organization.",
        category: "innovation",
        icon: "💡",
    },
    PostSeed {
        title: "The Rise of Progressive Web Apps",
        content: "PWAs are changing how we think about web and mobile development. Discover why they are becoming the preferred choice for modern applications.",
        excerpt: "Why PWAs are becoming the preferred choice for modern web development.",
        category: "technology",
        icon: "📱",
    },
];

static PROJECTS: &[ProjectSeed] = &[
    ProjectSeed {
        name: "E-Commerce Platform",
        description: "Full-stack e-commerce solution with AI-powered product recommendations and seamless checkout experience.",
        category: "web",
        icon: "🛒",
        technologies: &["React", "Node.js", "MongoDB", "AI/ML"],
        client: "ShopMax Global",
    },
    ProjectSeed {
        name: "HealthTrack App",
        description: "Mobile health monitoring application with real-time vitals tracking and doctor consultation features.",
        category: "mobile",
        icon: "🏥",
        technologies: &["React Native", "Firebase", "HealthKit"],
        client: "MediCare Plus",
    },
    ProjectSeed {
        name: "Analytics Dashboard",
        description: "Real-time business intelligence platform with customizable dashboards and predictive analytics.",
        category: "saas",
        icon: "📊",
        technologies: &["Vue.js", "Python", "AWS", "TensorFlow"],
        client: "DataCorp",
    },
    ProjectSeed {
        name: "ChatBot Assistant",
        description: "AI-powered customer service chatbot with natural language understanding and sentiment analysis.",
        category: "ai",
        icon: "🤖",
        technologies: &["Python", "TensorFlow", "NLP", "Docker"],
        client: "ServiceHub",
    },
    ProjectSeed {
        name: "E-Learning Platform",
        description: "Interactive online learning management system with video streaming and progress tracking.",
        category: "web",
        icon: "🎓",
        technologies: &["Next.js", "PostgreSQL", "AWS S3"],
        client: "EduTech Institute",
    },
    ProjectSeed {
        name: "Finance Tracker",
        description: "Personal finance management mobile app with expense categorization and budget planning.",
        category: "mobile",
        icon: "💰",
        technologies: &["Flutter", "Node.js", "Plaid API"],
        client: "MoneyWise",
    },
];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|item| item.to_string()).collect()
}

/// Populate products, posts and projects with the demo catalog.
///
/// Each table is checked on its own and only seeded while it holds zero rows,
/// so running this on every start never duplicates content.
pub async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedReport, sqlx::Error> {
    let mut report = SeedReport::default();

    if Product::count(pool).await? == 0 {
        for seed in PRODUCTS {
            let payload = ProductPayload {
                name: Some(seed.name.to_string()),
                description: Some(seed.description.to_string()),
                category: Some(seed.category.to_string()),
                icon: Some(seed.icon.to_string()),
                features: Some(owned(seed.features)),
            };
            Product::create(pool, &payload).await?;
        }
        info!(count = PRODUCTS.len(), "Products seeded");
        report.products = PRODUCTS.len();
    }

    if Post::count(pool).await? == 0 {
        for seed in POSTS {
            let payload = PostPayload {
                title: Some(seed.title.to_string()),
                content: Some(seed.content.to_string()),
                excerpt: Some(seed.excerpt.to_string()),
                category: Some(seed.category.to_string()),
                icon: Some(seed.icon.to_string()),
                author: Some(SEED_AUTHOR.to_string()),
            };
            Post::create(pool, &payload).await?;
        }
        info!(count = POSTS.len(), "Posts seeded");
        report.posts = POSTS.len();
    }

    if Project::count(pool).await? == 0 {
        for seed in PROJECTS {
            let payload = ProjectPayload {
                name: Some(seed.name.to_string()),
                description: Some(seed.description.to_string()),
                category: Some(seed.category.to_string()),
                icon: Some(seed.icon.to_string()),
                technologies: Some(owned(seed.technologies)),
                client: Some(seed.client.to_string()),
            };
            Project::create(pool, &payload).await?;
        }
        info!(count = PROJECTS.len(), "Projects seeded");
        report.projects = PROJECTS.len();
    }

    Ok(report)
}

//! Landing page data

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub headline: &'static str,
    pub highlight: &'static str,
    pub tagline: &'static str,
    pub image_url: &'static str,
    pub actions: [CallToAction; 2],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offering {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandingResponse {
    pub hero: Hero,
    pub offerings: [Offering; 3],
}

pub fn landing() -> LandingResponse {
    LandingResponse {
        hero: Hero {
            headline: "Transform Your Fitness Journey with",
            highlight: "Expert Guidance",
            tagline: "Access daily workouts, join live training sessions, and get personalized coaching to achieve your fitness goals.",
            image_url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=2940&auto=format&fit=crop",
            actions: [
                CallToAction {
                    label: "Get Started",
                    href: "/register",
                },
                CallToAction {
                    label: "Browse Workouts",
                    href: "/workouts",
                },
            ],
        },
        offerings: [
            Offering {
                title: "Daily Workouts",
                description: "Access a library of professional workout videos with detailed instructions and modifications for all fitness levels.",
                image_url: "https://images.unsplash.com/photo-1599058917765-a780eda07a3e?q=80&w=2940&auto=format&fit=crop",
            },
            Offering {
                title: "Live Sessions",
                description: "Join group workout sessions led by expert trainers for real-time motivation and guidance.",
                image_url: "https://images.unsplash.com/photo-1571902943202-507ec2618e8f?q=80&w=2940&auto=format&fit=crop",
            },
            Offering {
                title: "Personal Support",
                description: "Get direct access to trainers through our integrated messaging system for personalized advice.",
                image_url: "https://images.unsplash.com/photo-1571019614242-c5c5dee9f50b?q=80&w=2940&auto=format&fit=crop",
            },
        ],
    }
}

/// GET /
pub async fn landing_page() -> Json<LandingResponse> {
    Json(landing())
}

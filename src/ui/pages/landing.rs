//! Landing page component
//!
//! The single marketing page for Flowdeck featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with staggered entrance and floating stat cards
//! - Infinite logo marquee, paused on hover
//! - Features section with scroll-revealed benefit cards
//! - Auto-advancing product screen carousel
//! - Roles & permissions accordion (one panel open at a time)
//! - FAQ accordion, CTA and footer sections

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::Transition;
use crate::ui::accordion::{Accordion, AccordionPanel, AccordionState};
use crate::ui::back_to_top::BackToTop;
use crate::ui::carousel::ScreenCarousel;
use crate::ui::header::{Header, Logo};
use crate::ui::icon::{Icon, icons};
use crate::ui::login_modal::LoginModal;
use crate::ui::theme::use_theme_context;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let login_open = RwSignal::new(false);

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header
                theme=theme
                on_login=Callback::new(move |_| login_open.set(true))
            />

            <HeroSection />
            <LogoMarquee />
            <FeaturesSection />
            <ScreensSection />
            <RolesSection />
            <FaqSection />
            <CtaSection />
            <Footer />

            <LoginModal
                is_open=Signal::derive(move || login_open.get())
                on_close=Callback::new(move |_| login_open.set(false))
            />
            <BackToTop />

            // CSS Animations
            <LandingStyles />

            // Intersection Observer for scroll animations
            <ScrollAnimationScript />
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        // Page title
        <Title text="Flowdeck - The Team Workspace That Keeps Up" />

        // Basic meta tags
        <Meta name="description" content="Plan sprints, assign roles, and track progress in one shared workspace. Flowdeck keeps distributed teams aligned without the meeting overhead." />
        <Meta name="keywords" content="team workspace, project management, sprint planning, roles and permissions, task tracking, collaboration" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://flowdeck.app/" />
        <Meta property="og:title" content="Flowdeck - The Team Workspace That Keeps Up" />
        <Meta property="og:description" content="Plan sprints, assign roles, and track progress in one shared workspace." />
        <Meta property="og:image" content="https://flowdeck.app/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://flowdeck.app/" />
        <Meta property="twitter:title" content="Flowdeck - The Team Workspace That Keeps Up" />
        <Meta property="twitter:description" content="Plan sprints, assign roles, and track progress in one shared workspace." />
        <Meta property="twitter:image" content="https://flowdeck.app/og-image.png" />

        // Canonical URL
        <Link rel="canonical" href="https://flowdeck.app/" />
    }
}

/// Hero section with staggered entrance animation
#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="min-h-screen flex items-center justify-center relative pt-16">
            <div class="max-w-7xl mx-auto px-4 grid lg:grid-cols-2 gap-12 items-center">
                <div class="hero-content text-center lg:text-left">
                    <h1 class="text-5xl sm:text-6xl font-bold text-theme-primary mb-6 tracking-tight
                               landing-fade-in-up">
                        "Work that flows, teams that ship"
                    </h1>
                    <p class="text-xl text-theme-secondary max-w-xl mx-auto lg:mx-0 mb-10 leading-relaxed
                              landing-fade-in-up landing-delay-200">
                        "Plan sprints, assign roles, and track progress in one shared workspace. Flowdeck keeps distributed teams aligned without the meeting overhead."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center lg:justify-start gap-4 landing-fade-in-up landing-delay-400">
                        <a href="#screens" class="landing-btn-primary">
                            "See It in Action"
                        </a>
                        <a href="#features" class="landing-btn-secondary">
                            "Explore Features"
                        </a>
                    </div>
                </div>

                // Hero visual with floating stat cards
                <div class="relative hidden lg:block landing-fade-in-up landing-delay-400">
                    <div class="relative h-96 bg-theme-secondary/30 rounded-2xl border border-theme overflow-visible">
                        <div class="absolute inset-0 opacity-20 landing-grid-bg rounded-2xl" aria-hidden="true"></div>

                        <div class="absolute -top-6 -left-6 landing-float-slow">
                            <FloatCard
                                icon=icons::CHECK
                                title="12 tasks shipped"
                                subtitle="today"
                            />
                        </div>
                        <div class="absolute -bottom-6 -right-6 landing-float-delayed">
                            <FloatCard
                                icon=icons::USERS
                                title="Sprint 24 on track"
                                subtitle="8 teammates active"
                            />
                        </div>
                    </div>
                </div>
            </div>

            // Scroll indicator
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-theme-tertiary" />
            </div>

            // Background decoration
            <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
            </div>
        </section>
    }
}

/// Floating stat card used in the hero visual
#[component]
fn FloatCard(icon: &'static str, title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="flex items-center gap-3 bg-theme-primary px-4 py-3 rounded-xl border border-theme shadow-xl">
            <div class="w-10 h-10 rounded-lg bg-accent-primary/10 flex items-center justify-center">
                <Icon name=icon class="w-5 h-5 text-accent-primary" />
            </div>
            <div>
                <p class="text-sm font-semibold text-theme-primary">{title}</p>
                <p class="text-xs text-theme-tertiary">{subtitle}</p>
            </div>
        </div>
    }
}

/// Infinite logo marquee, paused while hovered
#[component]
fn LogoMarquee() -> impl IntoView {
    let logos = [
        "Acme Corp",
        "Northwind",
        "Globex",
        "Initech",
        "Stark Labs",
        "Hooli",
    ];

    // The track is rendered twice and translated by half its width, so the
    // loop restarts seamlessly.
    let track = move || {
        logos
            .iter()
            .map(|logo| {
                view! {
                    <span class="px-10 text-lg font-semibold text-theme-tertiary whitespace-nowrap">
                        {*logo}
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <section class="py-12 border-y border-theme/50 bg-theme-secondary/10">
            <p class="text-center text-sm text-theme-tertiary uppercase tracking-wide mb-6">
                "Trusted by teams at"
            </p>
            <div class="landing-logo-marquee overflow-hidden">
                <div class="landing-logo-track flex items-center w-max">
                    {track()}
                    {track()}
                </div>
            </div>
        </section>
    }
}

/// Features section with scroll-revealed cards
#[component]
fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Why Flowdeck?"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Everything your team needs to plan, build, and ship together."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    <FeatureCard
                        icon="board"
                        title="Flexible Boards"
                        description="Kanban, list, or calendar. Switch views without losing context."
                    />
                    <FeatureCard
                        icon="roles"
                        title="Roles & Permissions"
                        description="Give every teammate exactly the access they need, nothing more."
                    />
                    <FeatureCard
                        icon="sync"
                        title="Instant Sync"
                        description="Changes appear for everyone the moment they happen."
                    />
                    <FeatureCard
                        icon="report"
                        title="Built-in Reports"
                        description="Velocity, cycle time, and burndown without exporting a thing."
                    />
                    <FeatureCard
                        icon="automate"
                        title="Automations"
                        description="Route, assign, and close out routine work automatically."
                    />
                    <FeatureCard
                        icon="secure"
                        title="Secure by Default"
                        description="SSO, audit trails, and encryption on every plan."
                    />
                </div>
            </div>
        </section>
    }
}

/// Feature card component
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="landing-scroll-animate bg-theme-primary p-6 rounded-xl border border-theme hover:border-accent-primary/50
                    transition-all duration-300 hover:shadow-lg hover:-translate-y-1">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <FeatureIcon icon=icon />
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-theme-secondary text-sm leading-relaxed">{description}</p>
        </div>
    }
}

/// Feature icon component
#[component]
fn FeatureIcon(icon: &'static str) -> impl IntoView {
    let svg_content = match icon {
        "board" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M4 5a1 1 0 011-1h14a1 1 0 011 1v2a1 1 0 01-1 1H5a1 1 0 01-1-1V5zM4 13a1 1 0 011-1h6a1 1 0 011 1v6a1 1 0 01-1 1H5a1 1 0 01-1-1v-6zM16 13a1 1 0 011-1h2a1 1 0 011 1v6a1 1 0 01-1 1h-2a1 1 0 01-1-1v-6z" />
        },
        "roles" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M17 20h5v-2a3 3 0 00-5.356-1.857M17 20H7m10 0v-2c0-.656-.126-1.283-.356-1.857M7 20H2v-2a3 3 0 015.356-1.857M7 20v-2c0-.656.126-1.283.356-1.857m0 0a5.002 5.002 0 019.288 0M15 7a3 3 0 11-6 0 3 3 0 016 0zm6 3a2 2 0 11-4 0 2 2 0 014 0zM7 10a2 2 0 11-4 0 2 2 0 014 0z" />
        },
        "sync" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15" />
        },
        "report" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z" />
        },
        "automate" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
        "secure" => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                  d="M9 12l2 2 4-4m5.618-4.016A11.955 11.955 0 0112 2.944a11.955 11.955 0 01-8.618 3.04A12.02 12.02 0 003 9c0 5.591 3.824 10.29 9 11.622 5.176-1.332 9-6.03 9-11.622 0-1.042-.133-2.052-.382-3.016z" />
        },
        _ => view! {
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M13 10V3L4 14h7v7l9-11h-7z" />
        },
    };

    view! {
        <svg class="w-6 h-6 text-accent-primary" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
            {svg_content}
        </svg>
    }
}

/// Product screens section with the auto-advancing carousel
#[component]
fn ScreensSection() -> impl IntoView {
    view! {
        <section id="screens" class="py-20 px-4">
            <div class="max-w-4xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "One Workspace, Every View"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Boards for the day-to-day, timelines for the quarter, reports for the retro."
                    </p>
                </div>

                <div class="landing-scroll-animate">
                    <ScreenCarousel />
                </div>
            </div>
        </section>
    }
}

/// Role definition rendered as one accordion panel
struct Role {
    id: &'static str,
    name: &'static str,
    summary: &'static str,
    permissions: &'static [&'static str],
}

const ROLES: &[Role] = &[
    Role {
        id: "admin",
        name: "Admin",
        summary: "Full control over the workspace, billing, and members.",
        permissions: &[
            "Manage members and invitations",
            "Configure roles and permissions",
            "Access billing and plan settings",
            "Delete projects and archives",
        ],
    },
    Role {
        id: "manager",
        name: "Manager",
        summary: "Runs projects end to end without touching workspace settings.",
        permissions: &[
            "Create and archive projects",
            "Assign tasks across teams",
            "Publish reports and dashboards",
        ],
    },
    Role {
        id: "member",
        name: "Member",
        summary: "The everyday contributor role for teammates.",
        permissions: &[
            "Create and edit tasks",
            "Comment and mention teammates",
            "Track time on assigned work",
        ],
    },
    Role {
        id: "guest",
        name: "Guest",
        summary: "Read-only access for clients and stakeholders.",
        permissions: &[
            "View shared projects",
            "Export read-only reports",
        ],
    },
];

/// Roles & permissions section driven by the disclosure group
#[component]
fn RolesSection() -> impl IntoView {
    let accordion = AccordionState::new(ROLES.iter().map(|role| role.id))
        .with_on_transition(Callback::new(|transition: Transition| {
            leptos::logging::log!("role panel {} is {}", transition.panel_id, transition.state);
        }));

    view! {
        <section id="roles" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Roles & Permissions"
                    </h2>
                    <p class="text-lg text-theme-secondary">
                        "Four roles cover everyone from workspace owners to outside stakeholders."
                    </p>
                </div>

                <div class="landing-scroll-animate">
                    <Accordion>
                        {ROLES.iter().map(|role| {
                            view! {
                                <AccordionPanel state=accordion id=role.id title=role.name>
                                    <p class="mb-3">{role.summary}</p>
                                    <ul class="space-y-2">
                                        {role.permissions.iter().map(|permission| {
                                            view! {
                                                <li class="flex items-center gap-3">
                                                    <Icon name=icons::CHECK class="w-4 h-4 text-green-500 flex-shrink-0" />
                                                    <span class="text-sm">{*permission}</span>
                                                </li>
                                            }
                                        }).collect_view()}
                                    </ul>
                                </AccordionPanel>
                            }
                        }).collect_view()}
                    </Accordion>
                </div>
            </div>
        </section>
    }
}

/// FAQ section reusing the accordion component
#[component]
fn FaqSection() -> impl IntoView {
    let faqs: &[(&str, &str, &str)] = &[
        (
            "what-is",
            "What is Flowdeck?",
            "Flowdeck is a shared workspace where teams plan sprints, assign work, and track progress. Boards, timelines, and reports all read from the same tasks, so nothing needs syncing.",
        ),
        (
            "pricing",
            "Is there a free plan?",
            "Yes. Small teams can use Flowdeck free forever with up to three projects. Paid plans add unlimited projects, guest seats, and advanced reporting.",
        ),
        (
            "migrate",
            "Can we import from other tools?",
            "Flowdeck imports boards and tasks from the most common project trackers, including CSV export from anything else. Assignees, labels, and due dates come along.",
        ),
        (
            "security",
            "How is our data protected?",
            "All data is encrypted in transit and at rest. SSO and audit logs are included on team plans, and access is scoped by the same roles you see above.",
        ),
    ];

    let accordion = AccordionState::new(faqs.iter().copied().map(|(id, _, _)| id));

    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-16 landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Frequently Asked Questions"
                    </h2>
                    <p class="text-lg text-theme-secondary">
                        "Got questions? We've got answers."
                    </p>
                </div>

                <div class="landing-scroll-animate">
                    <Accordion>
                        {faqs.iter().copied().map(|(id, question, answer)| {
                            view! {
                                <AccordionPanel state=accordion id=id title=question>
                                    {answer}
                                </AccordionPanel>
                            }
                        }).collect_view()}
                    </Accordion>
                </div>
            </div>
        </section>
    }
}

/// Call-to-action section
#[component]
fn CtaSection() -> impl IntoView {
    view! {
        <section class="py-24 px-4 bg-gradient-to-b from-transparent to-theme-secondary/30">
            <div class="max-w-4xl mx-auto text-center landing-scroll-animate">
                <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                    "Ready to get your team in flow?"
                </h2>
                <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">
                    "Join thousands of teams that plan and ship with Flowdeck."
                </p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <a href="#" class="landing-btn-primary">
                        "Get Started Free"
                    </a>
                    <a href="#features" class="landing-btn-secondary">
                        "See All Features"
                    </a>
                </div>
            </div>
        </section>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"Flowdeck"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "The team workspace that keeps up. Plan, build, and ship together."
                        </p>
                    </div>

                    // Product links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#features" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Features"
                                </a>
                            </li>
                            <li>
                                <a href="#roles" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Roles"
                                </a>
                            </li>
                            <li>
                                <a href="#faq" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "FAQ"
                                </a>
                            </li>
                        </ul>
                    </div>

                    // Company
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Company"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="mailto:hello@flowdeck.app" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Contact"
                                </a>
                            </li>
                            <li>
                                <a href="#" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Privacy"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 Flowdeck. All rights reserved."
                    </span>
                </div>
            </div>
        </footer>
    }
}

/// CSS styles for landing page animations
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            /* Button styles */
            .landing-btn-primary {
                display: inline-block;
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #2563eb;
                border-radius: 0.75rem;
                transition: all 0.3s;
                transform: scale(1);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                cursor: pointer;
            }
            .landing-btn-primary:hover {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }

            .landing-btn-secondary {
                display: inline-block;
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                border: 2px solid #9ca3af;
                border-radius: 0.75rem;
                transition: all 0.3s;
                box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                background-color: #f9fafb;
                color: #374151;
            }
            .dark .landing-btn-secondary {
                background-color: #1f2937;
                border-color: #6b7280;
                color: #e5e7eb;
            }
            .landing-btn-secondary:hover {
                transform: scale(1.05);
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            }

            /* Grid background */
            .landing-grid-bg {
                background-image: radial-gradient(circle, currentColor 1px, transparent 1px);
                background-size: 24px 24px;
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }

            /* Floating stat cards */
            @keyframes landing-float {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-10px); }
            }

            .landing-float-slow {
                animation: landing-float 4s ease-in-out infinite;
            }

            .landing-float-delayed {
                animation: landing-float 5s ease-in-out infinite;
                animation-delay: 0.5s;
            }

            /* Logo marquee */
            @keyframes landing-logo-scroll {
                from { transform: translateX(0); }
                to { transform: translateX(-50%); }
            }

            .landing-logo-track {
                animation: landing-logo-scroll 20s linear infinite;
            }

            .landing-logo-marquee:hover .landing-logo-track {
                animation-play-state: paused;
            }

            /* Scroll animations */
            .landing-scroll-animate {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .landing-scroll-animate.visible {
                opacity: 1;
                transform: translateY(0);
            }
            "#
        </style>
    }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}

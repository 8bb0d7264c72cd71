use log::{error, info};
use yew::prelude::*;

use crate::components::{
    axis::DetailedAxis,
    cards::{HistoryCard, IndustryCard, StatCard},
    reveal::AnimateOnScroll,
    scroll_indicator::ScrollIndicator,
};
use crate::content::{self, SiteContent};
use crate::pages::not_found::NotFound;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub version: AttrValue,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let site = use_memo(|version| content::load(version), props.version.to_string());

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    match &*site {
        Ok(site) => {
            info!("Rendering page version {}", props.version);
            html! { <Page site={site.clone()} /> }
        }
        Err(e) => {
            error!("{}", e);
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
struct PageProps {
    site: SiteContent,
}

#[function_component(Page)]
fn page(props: &PageProps) -> Html {
    let site = &props.site;
    let accent: AttrValue = site.accent.clone().into();

    html! {
        <div class="bg-white text-gray-800 font-sans">
            <header class="fixed top-0 left-0 right-0 z-50 bg-blue-100/80 backdrop-blur-lg shadow-md">
                <nav class="container mx-auto px-6 py-2 flex justify-between items-center">
                    <div class="text-2xl font-bold">
                        <img src={site.logo.clone()} alt="Logo" width="120" height="32" />
                    </div>
                    <div class="hidden md:flex space-x-8 items-center">
                        {
                            site.nav_links.iter().map(|link| html! {
                                <a key={link.title.clone()} href={link.href.clone()} class={format!("text-gray-800 hover:text-{}-600 transition-colors duration-300", accent)}>
                                    { &link.title }
                                </a>
                            }).collect::<Html>()
                        }
                    </div>
                </nav>
            </header>

            <main>
                // Hero
                <section class="relative h-screen flex items-center justify-center overflow-hidden">
                    <img src={site.hero.image.clone()} alt="Hero background" class="absolute inset-0 w-full h-full object-cover z-0" />
                    <div class="absolute inset-0 bg-black/30"></div>
                    <div class="relative z-10 text-center">
                        <AnimateOnScroll animation="animate-fade-in-down">
                            <h1 class="text-6xl md:text-8xl font-extrabold text-white" style="text-shadow: 2px 2px 8px rgba(0,0,0,0.7)">
                                { &site.hero.title }
                            </h1>
                            <p class="text-2xl md:text-3xl text-white mt-2" style="text-shadow: 1px 1px 4px rgba(0,0,0,0.7)">
                                { &site.hero.subtitle }
                            </p>
                        </AnimateOnScroll>
                    </div>
                </section>

                // Group profile
                <section class="py-24 container mx-auto px-6 text-center">
                    <AnimateOnScroll animation="animate-fade-in-up">
                        <h2 class="text-4xl font-bold">{ &site.profile.title }</h2>
                        <p class="text-lg text-gray-500 mt-2">{ &site.profile.title_en }</p>
                        <div class="max-w-4xl mx-auto">
                            {
                                site.profile.paragraphs.iter().enumerate().map(|(i, text)| html! {
                                    <p key={i} class={classes!("text-gray-600", "text-lg", "leading-relaxed", if i == 0 { "mt-8" } else { "mt-4" })}>
                                        { text }
                                    </p>
                                }).collect::<Html>()
                            }
                        </div>
                    </AnimateOnScroll>
                </section>

                // Banner
                <section class="py-24 bg-gray-50">
                    <div class="container mx-auto px-6 text-center">
                        <AnimateOnScroll animation="animate-zoom-in">
                            <h2
                                class={format!("text-8xl md:text-9xl font-extrabold text-{}-500 tracking-widest", accent)}
                                style="-webkit-box-reflect: below -15px linear-gradient(transparent 40%, rgba(0,0,0,0.2));"
                            >
                                { &site.banner }
                            </h2>
                        </AnimateOnScroll>
                    </div>
                </section>

                // Digital stats
                <section class="relative py-24 bg-cover bg-center" style={format!("background-image: url('{}');", site.digital.background)}>
                    <div class={format!("absolute inset-0 bg-{}-100/30", accent)}></div>
                    <div class="relative">
                        <div class="text-center mb-12">
                            <AnimateOnScroll animation="animate-fade-in-down">
                                <h2 class={format!("text-4xl font-bold text-{}-800", accent)}>{ &site.digital.title }</h2>
                                <p class={format!("text-lg mt-2 text-{}-900", accent)}>{ &site.digital.title_en }</p>
                            </AnimateOnScroll>
                        </div>
                        <div class="bg-white/80 backdrop-blur-sm p-12">
                            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                                {
                                    site.digital.stats.iter().map(|stat| html! {
                                        <StatCard key={stat.label.clone()} stat={stat.clone()} accent={accent.clone()} />
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>
                    </div>
                </section>

                // Group industry
                <section class="container mx-auto px-6 py-4">
                    <AnimateOnScroll animation="animate-slide-in-up" threshold={0.5}>
                        <HistoryCard entry={site.industry.clone()} accent={accent.clone()} />
                    </AnimateOnScroll>
                    <div class="mt-16 flex flex-col gap-24">
                        {
                            site.industries.iter().enumerate().map(|(i, industry)| {
                                let delay: AttrValue = format!("anim-delay-{}", ((i % 5) + 1) * 100).into();
                                html! {
                                    <AnimateOnScroll key={industry.title.clone()} animation="animate-fade-in-up" delay={delay}>
                                        <IndustryCard industry={industry.clone()} reverse={i % 2 == 1} />
                                    </AnimateOnScroll>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </section>

                <DetailedAxis label={site.axis_label.clone()} />

                // Corporate honors
                <section class="py-24" style="background: linear-gradient(to right, #f0f4f8, #e6e9f0);">
                    <div class="container mx-auto px-6">
                        <div class="flex flex-col md:flex-row items-center gap-16">
                            <div class="md:w-1/2">
                                <AnimateOnScroll animation="animate-fade-in-right">
                                    <div class="text-gray-600 mb-4">{ &site.honors.caption }</div>
                                    <img src={site.honors.image.clone()} alt="Honors" width="500" height="400" loading="lazy" class="rounded-lg" />
                                </AnimateOnScroll>
                            </div>
                            <div class="md:w-1/2">
                                <AnimateOnScroll animation="animate-fade-in-left">
                                    <h2 class={format!("text-3xl font-bold text-{}-900", accent)}>{ &site.honors.title }</h2>
                                    <p class={format!("text-lg text-{}-900 mt-1", accent)}>{ &site.honors.title_en }</p>
                                    <p class="mt-6 text-gray-700 leading-relaxed">{ &site.honors.intro }</p>
                                    <div class="mt-8 grid grid-cols-1 md:grid-cols-2 gap-x-12 gap-y-2 text-gray-800">
                                        { honor_list(&site.honors.left, &accent) }
                                        { honor_list(&site.honors.right, &accent) }
                                    </div>
                                </AnimateOnScroll>
                            </div>
                        </div>
                    </div>
                </section>

                // Development history
                <section class="py-24 container mx-auto px-6">
                    <div class="mt-16">
                        <AnimateOnScroll animation="animate-slide-in-up" threshold={0.5}>
                            <HistoryCard entry={site.history.clone()} accent={accent.clone()} />
                        </AnimateOnScroll>
                    </div>
                </section>
            </main>
            <DetailedAxis label={site.axis_label.clone()} />

            <ScrollIndicator />
        </div>
    }
}

fn honor_list(honors: &[String], accent: &str) -> Html {
    html! {
        <ul>
            {
                honors.iter().enumerate().map(|(i, honor)| html! {
                    <li key={i} class="flex items-start mt-3">
                        <span class={format!("text-{}-800 mr-3 font-bold text-lg", accent)}>{"•"}</span>
                        <span>{ honor }</span>
                    </li>
                }).collect::<Html>()
            }
        </ul>
    }
}

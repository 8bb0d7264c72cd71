use log::warn;
use yew::prelude::*;

use crate::components::counter::AnimatedNumber;
use crate::content::{HistoryEntry, Industry, Stat};

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
    pub accent: AttrValue,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let color = format!("text-{}-800", props.accent);
    let number = match props.stat.number() {
        Ok(target) => html! { <AnimatedNumber target={target} /> },
        Err(e) => {
            warn!("{}", e);
            html! { <>{ props.stat.value.clone() }</> }
        }
    };

    html! {
        <div class="text-center">
            <div class="relative inline-block">
                <p class={classes!("text-7xl", "font-extrabold", "pr-4", color.clone())}>
                    { number }
                </p>
                {
                    if props.stat.has_plus() {
                        html! { <span class={classes!("absolute", "bottom-1", "right-0", "text-3xl", "font-bold", color)}>{"+"}</span> }
                    } else {
                        html! {}
                    }
                }
            </div>
            <p class="text-xl mt-2 text-gray-700">{ props.stat.label.clone() }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct IndustryCardProps {
    pub industry: Industry,
    #[prop_or_default]
    pub reverse: bool,
}

#[function_component(IndustryCard)]
pub fn industry_card(props: &IndustryCardProps) -> Html {
    let Industry { year, title, description, img_src } = &props.industry;
    html! {
        <div class={classes!("flex", "flex-col", "md:flex-row", "items-center", "gap-12", props.reverse.then(|| "md:flex-row-reverse"))}>
            <div class="md:w-1/2 relative py-8">
                <div class="absolute -top-8 -left-4 text-[12rem] font-extrabold text-gray-100 z-0 leading-none select-none">
                    { year }
                </div>
                <div class="relative z-10">
                    <h3 class="text-3xl font-bold text-gray-900">{ title }</h3>
                    <p class="mt-6 text-lg text-gray-700 leading-loose">{ description }</p>
                </div>
            </div>
            <div class="md:w-1/2">
                <img src={img_src.clone()} alt={title.clone()} width="500" height="350" loading="lazy" class="rounded-lg shadow-2xl object-cover" />
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct HistoryCardProps {
    pub entry: HistoryEntry,
    pub accent: AttrValue,
    #[prop_or_default]
    pub reverse: bool,
}

/// Section intro on one side, a single timeline event on the other.
#[function_component(HistoryCard)]
pub fn history_card(props: &HistoryCardProps) -> Html {
    let entry = &props.entry;
    let accent = &props.accent;
    let heading = format!("text-4xl font-bold text-{}-800", accent);

    html! {
        <div class={classes!("flex", "flex-col", "md:flex-row", "gap-12", props.reverse.then(|| "md:flex-row-reverse"))}>
            <div class="md:w-1/2 relative py-8 flex-col flex gap-2">
                <div class="flex items-center justify-between">
                    <h2 class={heading.clone()}>{ &entry.section_title }</h2>
                    {
                        if entry.more {
                            html! {
                                <button class={format!("bg-gradient-to-r from-{0}-800 via-{0}-700 to-{0}-500 text-white px-6 py-2 rounded-full hover:shadow-lg hover:opacity-90 transition-all duration-300 text-sm", accent)}>
                                    {"点击了解更多"}
                                </button>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <h2 class={heading}>{ &entry.section_title_en }</h2>
                <p class="relative z-10 text-gray-600 leading-relaxed">{ &entry.general_text }</p>
                <div class={format!("text-[10rem] mt-auto font-bold text-{}-100 z-0 leading-none", accent)}>{ &entry.year }</div>
            </div>
            <div class="md:w-1/2">
                <div class={format!("bg-{0}-50 p-8 rounded-3xl shadow-lg border border-{0}-100 relative pl-12", accent)}>
                    <div class={format!("absolute top-12 bottom-8 left-8 w-0.5 bg-{}-200", accent)}></div>
                    <div class={format!("absolute top-8 left-[26px] w-4 h-4 rounded-full bg-{}-500 ring-4 ring-white", accent)}></div>

                    <h4 class={format!("text-4xl font-bold text-{}-300", accent)}>{ &entry.year }</h4>
                    <p class="mt-4 text-gray-600 whitespace-pre-line">{ &entry.event_description }</p>
                    <div class="mt-6 relative">
                        <img src={entry.event_img_src.clone()} alt={entry.event_title.clone()} width="400" height="250" loading="lazy" class="rounded-lg shadow-md object-cover w-full" />
                        <div class={format!("absolute inset-0 bg-gradient-to-t from-{0}-50 via-{0}-50/50 to-transparent rounded-lg", accent)}></div>
                    </div>
                </div>
            </div>
        </div>
    }
}

use yew::prelude::*;
use yew_router::prelude::Link;

use crate::hooks::use_progress::use_progress;
use crate::models::{format_timestamp, update_progress, AchievementView};
use crate::{base::Base, styles, Route};

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let progress = use_progress();
    let stats = &progress.stats;

    let on_clear_history = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        update_progress(|store| store.clear_history());
    });

    let on_reset_stats = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        update_progress(|store| store.reset_stats());
    });

    let first_spin = stats
        .first_spin_at
        .map(format_timestamp)
        .unwrap_or_else(|| "Not yet".to_string());

    html! {
        <Base>
            <div class={styles::PAGE}>
                <div class="flex flex-col md:flex-row justify-between items-start md:items-center gap-6 mb-8">
                    <h1 class={styles::PAGE_TITLE}>
                        {"Your Spins"}
                    </h1>
                    <Link<Route> to={Route::Home} classes={styles::BUTTON_PRIMARY}>{"Back to the wheel"}</Link<Route>>
                </div>

                <div class="grid grid-cols-2 lg:grid-cols-4 gap-4 mb-8">
                    {status_card("Total spins", &stats.total_spins.to_string(), "bg-gradient-to-br from-amber-50 to-amber-100 dark:from-amber-900/40 dark:to-amber-800/20", "text-amber-600 dark:text-amber-400", "🎡")}
                    {status_card("Wheels created", &stats.total_wheels_created.to_string(), "bg-gradient-to-br from-emerald-50 to-emerald-100 dark:from-emerald-900/40 dark:to-emerald-800/20", "text-emerald-600 dark:text-emerald-400", "🛠️")}
                    {status_card("Shares", &stats.total_shares.to_string(), "bg-gradient-to-br from-violet-50 to-violet-100 dark:from-violet-900/40 dark:to-violet-800/20", "text-violet-600 dark:text-violet-400", "📣")}
                    {status_card("First spin", &first_spin, "bg-gradient-to-br from-blue-50 to-blue-100 dark:from-blue-900/40 dark:to-blue-800/20", "text-blue-600 dark:text-blue-400", "📅")}
                </div>

                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <div class={classes!(styles::CARD, "lg:col-span-2")}>
                        <h2 class={styles::TEXT_H3}>
                            {format!("Achievements ({}/{})", progress.unlocked_count(), progress.achievements.len())}
                        </h2>
                        <div class="mt-4 grid grid-cols-1 sm:grid-cols-2 gap-4">
                            { for progress.achievements.iter().map(achievement_card) }
                        </div>
                    </div>

                    <div class={styles::CARD}>
                        <div class="flex items-center justify-between">
                            <h2 class={styles::TEXT_H3}>{"Recent winners"}</h2>
                            <button onclick={on_clear_history} class={styles::BUTTON_SECONDARY}>{"Clear"}</button>
                        </div>
                        if progress.history.is_empty() {
                            <p class={classes!(styles::TEXT_SMALL, "mt-4")}>{"No spins yet."}</p>
                        } else {
                            <ul class="mt-4 space-y-2">
                                { for progress.history.iter().map(|entry| html! {
                                    <li key={entry.id.clone()} class="flex justify-between">
                                        <span class={styles::TEXT_BODY}>{entry.winner_label.clone()}</span>
                                        <span class={styles::TEXT_SMALL}>{format_timestamp(entry.timestamp)}</span>
                                    </li>
                                }) }
                            </ul>
                        }
                        <button onclick={on_reset_stats} class={classes!(styles::BUTTON_DANGER, "mt-6", "w-full")}>
                            {"Reset stats"}
                        </button>
                    </div>
                </div>
            </div>
        </Base>
    }
}

fn achievement_card(achievement: &AchievementView) -> Html {
    let percent = (achievement.progress * 100.0).round() as u32;
    let (card_style, badge) = if achievement.unlocked {
        (styles::ACHIEVEMENT_UNLOCKED, "🏆")
    } else {
        (styles::ACHIEVEMENT_LOCKED, "🔒")
    };

    html! {
        <div key={achievement.definition.id.clone()} class={card_style}>
            <div class="flex items-center gap-3">
                <span class="text-2xl">{badge}</span>
                <div>
                    <p class={styles::CARD_TITLE}>{achievement.definition.name.clone()}</p>
                    <p class={styles::CARD_TEXT}>{achievement.definition.description.clone()}</p>
                </div>
            </div>
            <div class={styles::PROGRESS_TRACK}>
                <div class={styles::PROGRESS_FILL} style={format!("width: {}%", percent)}></div>
            </div>
            <p class={classes!(styles::TEXT_HINT, "text-right")}>
                { match achievement.unlocked_at {
                    Some(at) => format!("Unlocked {}", format_timestamp(at)),
                    None => format!("{}%", percent),
                } }
            </p>
        </div>
    }
}

fn status_card(title: &str, value: &str, bg_style: &str, text_style: &str, icon: &str) -> Html {
    html! {
        <div class={classes!(styles::STAT_CARD, bg_style.to_string())}>
            <div class={format!("w-12 h-12 rounded-lg {} flex items-center justify-center text-2xl mb-2", text_style)}>
                {icon}
            </div>
            <p class="text-sm font-medium text-gray-600 dark:text-gray-400">{title}</p>
            <p class={format!("text-2xl font-bold {}", text_style)}>{value}</p>
        </div>
    }
}

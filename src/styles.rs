use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Keyframes and the `animate-*` / `anim-delay-*` classes that
/// `AnimateOnScroll` switches on.
#[function_component(RevealAnimations)]
pub fn reveal_animations() -> Html {
    html! {
        <Global css={css!(r#"
            @keyframes fadeInDown {
                from { opacity: 0; transform: translateY(-2rem); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes fadeInUp {
                from { opacity: 0; transform: translateY(2rem); }
                to { opacity: 1; transform: translateY(0); }
            }
            @keyframes fadeInLeft {
                from { opacity: 0; transform: translateX(2rem); }
                to { opacity: 1; transform: translateX(0); }
            }
            @keyframes fadeInRight {
                from { opacity: 0; transform: translateX(-2rem); }
                to { opacity: 1; transform: translateX(0); }
            }
            @keyframes zoomIn {
                from { opacity: 0; transform: scale(0.8); }
                to { opacity: 1; transform: scale(1); }
            }
            @keyframes slideInUp {
                from { opacity: 0; transform: translateY(100%); }
                to { opacity: 1; transform: translateY(0); }
            }

            .animate-fade-in-down { animation: fadeInDown 1s ease-out both; }
            .animate-fade-in-up { animation: fadeInUp 1s ease-out both; }
            .animate-fade-in-left { animation: fadeInLeft 1s ease-out both; }
            .animate-fade-in-right { animation: fadeInRight 1s ease-out both; }
            .animate-zoom-in { animation: zoomIn 1s ease-out both; }
            .animate-slide-in-up { animation: slideInUp 0.8s ease-out both; }

            .anim-delay-100 { animation-delay: 100ms; }
            .anim-delay-200 { animation-delay: 200ms; }
            .anim-delay-300 { animation-delay: 300ms; }
            .anim-delay-400 { animation-delay: 400ms; }
            .anim-delay-500 { animation-delay: 500ms; }

            @media (prefers-reduced-motion: reduce) {
                .animate-fade-in-down,
                .animate-fade-in-up,
                .animate-fade-in-left,
                .animate-fade-in-right,
                .animate-zoom-in,
                .animate-slide-in-up {
                    animation: none;
                    opacity: 1;
                }
            }
        "#)} />
    }
}

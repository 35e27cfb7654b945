// Page stylesheet. Accent colors come in per card as `--accent-*` custom
// properties, motion timings as custom properties on `.portal`.
pub const PORTAL_CSS: &str = r#"
.portal {
    min-height: 100vh;
    box-sizing: border-box;
    padding: 2rem 1rem;
    color: #ffffff;
}

.portal__container {
    max-width: 1536px;
    margin: 0 auto;
}

/* Header */
.portal-header {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.5rem;
    margin-bottom: 3rem;
    text-align: center;
}

.portal-header__logo {
    width: 80px;
    height: 80px;
    object-fit: contain;
    filter: drop-shadow(0 4px 12px rgba(0, 0, 0, 0.3));
    animation: logoIn 0.8s ease-out both;
}

.portal-header__title {
    margin: 0;
    max-width: 72rem;
    font-size: 1.5rem;
    font-weight: 900;
    line-height: 1.2;
    letter-spacing: 0.025em;
    text-shadow: 0 6px 20px rgba(0, 0, 0, 0.4), 0 2px 8px rgba(0, 0, 0, 0.3);
    --rise: -30px;
    animation: fadeDown 0.8s ease-out 0.2s both;
}

.portal-header__subtitle {
    margin: 0;
    max-width: 64rem;
    font-size: 1.125rem;
    font-weight: 700;
    line-height: 1.3;
    text-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
    --rise: -20px;
    animation: fadeDown 0.8s ease-out 0.4s both;
}

.portal-header__organization {
    margin: 0;
    font-size: 1rem;
    font-weight: 600;
    line-height: 1.3;
    color: rgba(255, 255, 255, 0.92);
    text-shadow: 0 2px 8px rgba(0, 0, 0, 0.3);
    --rise: -10px;
    animation: fadeDown 0.8s ease-out 0.6s both;
}

.portal-header__divider {
    width: 100px;
    height: 5px;
    border-radius: 9999px;
    background: linear-gradient(to right, #76e4f7, #4299e1, #805ad5, #ed64a6);
    box-shadow: 0 4px 20px rgba(99, 179, 237, 0.5);
    transform-origin: center;
    animation: dividerGrow 1s ease-out 0.8s both;
}

.portal-header__prompt {
    margin: 0;
    padding: 0 1rem;
    font-size: 0.875rem;
    font-weight: 500;
    color: rgba(255, 255, 255, 0.8);
    animation: fadeIn 0.8s ease-out 1s both;
}

/* Grid */
.service-grid {
    display: grid;
    grid-template-columns: repeat(1, minmax(0, 1fr));
    gap: 1.5rem;
    justify-items: center;
    align-items: center;
    width: fit-content;
    margin: 0 auto 4rem;
}

/* Card */
.service-card {
    display: block;
    width: 100%;
    max-width: 320px;
    color: inherit;
    text-decoration: none;
    animation: cardEnter var(--card-enter-duration) var(--hover-easing) both;
}

.service-card:hover,
.service-card:focus-visible {
    text-decoration: none;
}

.service-card__frame {
    position: relative;
    height: 100%;
    min-height: 280px;
    cursor: pointer;
}

.service-card__body {
    position: relative;
    box-sizing: border-box;
    height: 100%;
    min-height: inherit;
    padding: 2rem;
    overflow: hidden;
    background: #ffffff;
    border-radius: 1.5rem;
    box-shadow: 0 20px 60px -15px rgba(0, 0, 0, 0.3);
    transition: all var(--hover-duration) var(--hover-easing);
}

.service-card:hover .service-card__body {
    transform: translateY(-16px) scale(1.05);
    box-shadow: 0 30px 80px -10px rgba(0, 0, 0, 0.4);
}

.service-card__overlay {
    position: absolute;
    inset: 0;
    background: linear-gradient(135deg, var(--accent-50) 0%, #ffffff 50%, var(--accent-50) 100%);
    opacity: 0.6;
    transition: opacity 0.5s;
}

.service-card:hover .service-card__overlay {
    opacity: 0.9;
}

.service-card__glow {
    position: absolute;
    top: -50%;
    left: -50%;
    width: 200%;
    height: 200%;
    background: radial-gradient(circle, var(--accent-300) 0%, transparent 70%);
    opacity: 0;
    transition: all 0.6s;
}

.service-card:hover .service-card__glow {
    opacity: 0.3;
    transform: rotate(45deg);
}

.service-card__accent-bar {
    position: absolute;
    top: 0;
    left: 0;
    right: 0;
    height: 8px;
    background: linear-gradient(to right, var(--accent-400), var(--accent-600), var(--accent-400));
    border-top-left-radius: 1.5rem;
    border-top-right-radius: 1.5rem;
    transition: all 0.4s;
}

.service-card:hover .service-card__accent-bar {
    height: 12px;
}

.service-card__content {
    position: relative;
    z-index: 1;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1.25rem;
    text-align: center;
}

.service-card__icon {
    position: relative;
    display: flex;
    align-items: center;
    justify-content: center;
    width: 5rem;
    height: 5rem;
    border-radius: 1rem;
    background: linear-gradient(135deg, var(--accent-400), var(--accent-600));
    color: #ffffff;
    box-shadow: 0 15px 40px -12px var(--accent-500);
    animation: iconFloat var(--float-period) ease-in-out infinite;
    transition: box-shadow 0.5s;
}

.service-card__icon::before {
    content: "";
    position: absolute;
    inset: -3px;
    padding: 3px;
    border-radius: 1rem;
    background: linear-gradient(135deg, var(--accent-300), var(--accent-500), var(--accent-300));
    -webkit-mask: linear-gradient(#fff 0 0) content-box, linear-gradient(#fff 0 0);
    -webkit-mask-composite: xor;
    mask-composite: exclude;
    opacity: 0;
    transition: opacity 0.5s;
}

.service-card__icon:hover::before {
    opacity: 1;
}

.service-card:hover .service-card__icon {
    box-shadow: 0 20px 60px -8px var(--accent-600);
}

.service-card__glyph {
    font-size: 2.25rem;
    line-height: 1;
}

.service-card__heading {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 0.5rem;
    width: 100%;
}

.service-card__title {
    margin: 0;
    font-size: 1.25rem;
    font-weight: 700;
    line-height: 1.25;
    letter-spacing: -0.025em;
    color: #1a202c;
}

.service-card__cta {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.25rem;
    padding: 0.25rem 0.75rem;
    border-radius: 9999px;
    background: var(--accent-100);
    color: var(--accent-700);
    font-size: 0.75rem;
    font-weight: 600;
    transition: all 0.3s;
}

.service-card:hover .service-card__cta {
    background: var(--accent-200);
    transform: scale(1.1);
}

.service-card__cta-icon {
    font-size: 0.75rem;
}

.service-card__description {
    margin: 0;
    color: #4a5568;
    font-size: 0.875rem;
    font-weight: 500;
    line-height: 1.6;
    display: -webkit-box;
    -webkit-box-orient: vertical;
    -webkit-line-clamp: 3;
    line-clamp: 3;
    overflow: hidden;
}

.service-card__blob {
    position: absolute;
    border-radius: 9999px;
    transition: all 0.5s;
}

.service-card__blob--bottom {
    bottom: -4rem;
    right: -4rem;
    width: 10rem;
    height: 10rem;
    background: radial-gradient(var(--accent-200) 0%, var(--accent-100) 40%, transparent 70%);
    opacity: 0.5;
}

.service-card:hover .service-card__blob--bottom {
    transform: scale(1.3);
    opacity: 0.7;
}

.service-card__blob--top {
    top: -2.5rem;
    left: -2.5rem;
    width: 8rem;
    height: 8rem;
    background: radial-gradient(var(--accent-100) 0%, transparent 70%);
    opacity: 0.4;
}

.service-card:hover .service-card__blob--top {
    transform: scale(1.4);
    opacity: 0.6;
}

.service-card__ring {
    position: absolute;
    inset: -0.5rem;
    border: 3px solid var(--accent-200);
    border-radius: 1.5rem;
    opacity: 0;
    pointer-events: none;
    transition: opacity 0.4s;
}

.service-card:hover .service-card__ring {
    opacity: 1;
}

/* Footer */
.portal-footer {
    text-align: center;
    font-size: 0.875rem;
    color: rgba(255, 255, 255, 0.8);
    animation: fadeIn 0.6s ease-out 0.8s both;
}

.portal-footer p {
    margin: 0;
}

.portal-footer__rights {
    margin-top: 0.25rem !important;
    font-size: 0.75rem;
    color: rgba(255, 255, 255, 0.6);
}

@keyframes logoIn {
    from { opacity: 0; transform: scale(0.8); }
    to { opacity: 1; transform: scale(1); }
}

@keyframes fadeDown {
    from { opacity: 0; transform: translateY(var(--rise, -20px)); }
    to { opacity: 1; transform: translateY(0); }
}

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes dividerGrow {
    from { opacity: 0; transform: scaleX(0); }
    to { opacity: 1; transform: scaleX(1); }
}

@keyframes cardEnter {
    from { opacity: 0; transform: translateY(40px) scale(0.8); }
    to { opacity: 1; transform: translateY(0) scale(1); }
}

@keyframes iconFloat {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(var(--float-rise)); }
}

@media (min-width: 30em) {
    .service-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
    .portal-header__title {
        font-size: 1.875rem;
    }
}

@media (min-width: 48em) {
    .portal {
        padding: 3rem 2rem;
    }
    .portal-header {
        gap: 2rem;
        margin-bottom: 5rem;
    }
    .portal-header__logo {
        width: 120px;
        height: 120px;
    }
    .portal-header__title {
        font-size: 2.25rem;
    }
    .portal-header__subtitle {
        font-size: 1.25rem;
    }
    .portal-header__organization {
        font-size: 1.125rem;
    }
    .portal-header__divider {
        width: 140px;
    }
    .portal-header__prompt {
        font-size: 1rem;
    }
    .service-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
        gap: 2rem;
    }
    .service-card {
        width: 280px;
    }
    .service-card__frame {
        min-height: 320px;
    }
    .service-card__body {
        padding: 2.25rem;
    }
    .service-card__icon {
        width: 6rem;
        height: 6rem;
    }
    .service-card__glyph {
        font-size: 3rem;
    }
    .service-card__title {
        font-size: 1.5rem;
    }
}

@media (min-width: 62em) {
    .portal-header__logo {
        width: 150px;
        height: 150px;
    }
    .portal-header__title {
        font-size: 3rem;
    }
    .portal-header__subtitle {
        font-size: 1.5rem;
    }
    .portal-header__organization {
        font-size: 1.25rem;
    }
}

@media (min-width: 80em) {
    .service-grid {
        grid-template-columns: repeat(6, minmax(0, 1fr));
    }
    .service-card {
        width: 260px;
    }
}

@media (prefers-reduced-motion: reduce) {
    .portal *,
    .portal *::before {
        animation: none !important;
        transition: none !important;
    }
}
"#;

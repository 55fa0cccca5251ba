//! Dashboard CSS styles
//!
//! Uses CSS custom properties (variables) for theming. The chart reads
//! `--primary-color` and `--accent-color` for its two series.

pub const STYLES: &str = r"
* { box-sizing: border-box; margin: 0; padding: 0; }

:root {
    --bg: #f6f8fa;
    --card: #ffffff;
    --border: #d0d7de;
    --text: #1f2328;
    --text-dim: #656d76;
    --primary-color: #1f6feb;
    --accent-color: #f0883e;
    --green: #1a7f37;
    --red: #cf222e;
}

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg);
    color: var(--text);
    min-height: 100vh;
}

.container { max-width: 1200px; margin: 0 auto; padding: 20px; }
.hidden { display: none; }
.page { display: none; }
.page.active { display: block; }

/* Navigation */
.nav {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 12px 20px;
    background: var(--card);
    border-bottom: 1px solid var(--border);
}

.nav__brand { font-weight: 600; }
.nav__links { display: flex; gap: 16px; list-style: none; }
.nav__links .link a { color: var(--text-dim); text-decoration: none; }
.nav__links .link a.active { color: var(--primary-color); font-weight: 600; }
.nav__toggle { display: none; }

.mobile-menu {
    position: fixed;
    top: 0;
    right: -260px;
    width: 240px;
    height: 100vh;
    background: var(--card);
    padding: 20px;
    display: flex;
    flex-direction: column;
    gap: 12px;
    transition: right 0.2s;
    z-index: 20;
}

.mobile-menu.open { right: 0; }

.overlay {
    display: none;
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.3);
    z-index: 10;
}

@media (max-width: 720px) {
    .nav__links { display: none; }
    .nav__toggle { display: block; }
}

/* Buttons */
.btn {
    padding: 8px 16px;
    border-radius: 6px;
    border: none;
    font-size: 13px;
    font-weight: 500;
    cursor: pointer;
}

.btn-primary { background: var(--primary-color); color: #fff; }
.btn-secondary { background: var(--border); color: var(--text); }

/* Grid Layout */
.grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
    gap: 16px;
}

.wide { grid-column: 1 / -1; }

/* Cards */
.card {
    background: var(--card);
    border: 1px solid var(--border);
    border-radius: 12px;
    padding: 20px;
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 16px;
}

.card-title {
    font-size: 14px;
    color: var(--text-dim);
    text-transform: uppercase;
    letter-spacing: 0.5px;
}

.header-controls { display: flex; align-items: center; gap: 12px; }

.metrics { display: flex; flex-wrap: wrap; gap: 16px; margin-top: 12px; }
.metric { flex: 1; min-width: 120px; }
.metric-label { font-size: 11px; color: var(--text-dim); text-transform: uppercase; }
.metric-value { font-size: 18px; font-weight: 600; margin-top: 2px; }

.risk-info {
    background: rgba(31, 111, 235, 0.08);
    border-radius: 8px;
    padding: 12px;
    margin-top: 12px;
}

.risk-row { display: flex; justify-content: space-between; padding: 4px 0; font-size: 13px; }
.risk-label { color: var(--text-dim); }

/* Prediction states */
.loading { display: none; color: var(--text-dim); padding: 8px 0; }
.error-banner {
    display: none;
    background: rgba(207, 34, 46, 0.1);
    color: var(--red);
    border-radius: 6px;
    padding: 8px 12px;
}

.confidence-track { background: var(--border); border-radius: 6px; margin-top: 8px; overflow: hidden; }
.confidence-bar {
    background: var(--green);
    color: #fff;
    font-size: 11px;
    text-align: right;
    padding: 2px 6px;
    transition: width 0.3s;
}

.explanation, .insight-text { margin-top: 12px; font-size: 13px; white-space: pre-line; }

.chart-box { position: relative; height: 320px; margin-top: 16px; }
.chart-box__plot { width: 100%; height: 100%; }

/* Estimator */
.form { display: grid; gap: 8px; }
.form input, .form select, select { padding: 6px 8px; border: 1px solid var(--border); border-radius: 6px; }

/* Tables */
.prices-table { width: 100%; border-collapse: collapse; }
.prices-table th { text-align: left; font-size: 11px; color: var(--text-dim); text-transform: uppercase; padding: 8px; }
.prices-table td { padding: 0.8rem; border-bottom: 1px solid #eee; }

/* Footer */
.footer {
    display: flex;
    flex-wrap: wrap;
    justify-content: center;
    gap: 24px;
    padding: 16px;
    font-size: 13px;
    color: var(--text-dim);
}

.toast {
    display: none;
    position: fixed;
    bottom: 20px;
    left: 50%;
    transform: translateX(-50%);
    background: var(--text);
    color: #fff;
    padding: 10px 16px;
    border-radius: 6px;
}
";

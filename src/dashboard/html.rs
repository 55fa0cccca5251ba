//! Dashboard HTML template
//!
//! Contains the page structure the client binds to:
//! - Navigation bar with mobile menu
//! - Prediction panel with confidence bar and price chart
//! - Market insight card
//! - Cost estimator form
//! - Material price table
//! - Footer metrics strip

pub const TEMPLATE: &str = r##"
    <nav class="nav">
        <span class="nav__brand">🏗️ Material Price Dashboard</span>
        <ul class="nav__links">
            <li class="link"><a href="#" id="link-home" data-nav="home" class="active">Home</a></li>
            <li class="link"><a href="#" id="link-prediction-panel" data-nav="prediction-panel">Forecast</a></li>
            <li class="link"><a href="#" id="link-market-analysis" data-nav="market-analysis">Market</a></li>
            <li class="link"><a href="#" id="link-estimator" data-nav="estimator">Estimator</a></li>
            <li class="link"><a href="#" id="link-prices" data-nav="prices">Prices</a></li>
        </ul>
        <button class="btn btn-secondary nav__toggle" id="menuToggle">☰</button>
    </nav>
    <div class="mobile-menu" id="mobileMenu">
        <a href="#" data-nav="prediction-panel">Forecast</a>
        <a href="#" data-nav="market-analysis">Market</a>
        <a href="#" data-nav="estimator">Estimator</a>
        <a href="#" data-nav="prices">Prices</a>
    </div>
    <div class="overlay" id="overlay"></div>

    <main class="container page active" id="page-home">
        <div class="grid">
            <!-- Prediction Panel -->
            <section class="card wide" id="ai-prediction">
                <div class="card-header">
                    <span class="card-title">📈 AI Price Prediction</span>
                    <div class="header-controls">
                        <select id="materialSelector">
                            <option value="cement">Cement</option>
                            <option value="steel">Steel</option>
                            <option value="sand">Sand</option>
                            <option value="gravel">Gravel</option>
                            <option value="lumber">Lumber</option>
                            <option value="plywood">Plywood</option>
                        </select>
                        <button class="btn btn-primary" id="predictBtn">⚡ Predict</button>
                    </div>
                </div>
                <div class="loading" id="loadingIndicator">Loading prediction...</div>
                <div class="error-banner" id="predictionError">Could not load the prediction. Please try again.</div>
                <div id="predictionResults" class="hidden">
                    <div class="metrics">
                        <div class="metric">
                            <div class="metric-label">Current</div>
                            <div class="metric-value" id="predictionCurrent">₱0.00</div>
                        </div>
                        <div class="metric">
                            <div class="metric-label">7 Days</div>
                            <div class="metric-value" id="prediction7day">₱0.00</div>
                        </div>
                        <div class="metric">
                            <div class="metric-label">30 Days</div>
                            <div class="metric-value" id="prediction30day">₱0.00</div>
                        </div>
                        <div class="metric">
                            <div class="metric-label">Trend</div>
                            <div class="metric-value" id="predictionTrend">--</div>
                        </div>
                    </div>
                    <div class="risk-info">
                        <div class="risk-row">
                            <span class="risk-label">Confidence Range</span>
                            <span id="predictionConfidence">--</span>
                        </div>
                        <div class="confidence-track">
                            <div class="confidence-bar" id="confidenceBar" style="width: 0%">0%</div>
                        </div>
                        <p class="explanation" id="predictionExplanation"></p>
                    </div>
                </div>
                <div class="chart-box">
                    <div id="priceChart" class="chart-box__plot"></div>
                </div>
            </section>

            <!-- Market Insight -->
            <section class="card" id="market-insight">
                <div class="card-header">
                    <span class="card-title">🔍 Market Insight</span>
                </div>
                <div class="risk-info">
                    <div class="risk-row">
                        <span class="risk-label">Risk Level</span>
                        <span id="marketRiskLevel">--</span>
                    </div>
                    <div class="risk-row">
                        <span class="risk-label">Sentiment</span>
                        <span id="marketSentiment">--</span>
                    </div>
                </div>
                <p class="insight-text" id="marketInsightText">Loading...</p>
            </section>

            <!-- Estimator -->
            <section class="card" id="ai-estimator">
                <div class="card-header">
                    <span class="card-title">💰 Cost Estimator</span>
                </div>
                <div class="form">
                    <select id="proj-type">
                        <option value="residential">Residential</option>
                        <option value="commercial">Commercial</option>
                        <option value="infrastructure">Infrastructure</option>
                    </select>
                    <select id="est-material">
                        <option value="cement">Cement</option>
                        <option value="steel">Steel</option>
                        <option value="sand">Sand</option>
                        <option value="gravel">Gravel</option>
                        <option value="lumber">Lumber</option>
                        <option value="plywood">Plywood</option>
                    </select>
                    <input id="est-qty" type="number" min="0" placeholder="Quantity">
                    <input id="est-location" type="text" placeholder="Location">
                    <input id="est-timeline" type="number" min="0" placeholder="Days until purchase">
                    <button class="btn btn-primary" id="estimateBtn">Estimate</button>
                </div>
                <div class="metrics hidden" id="estResults">
                    <div class="metric">
                        <div class="metric-label">Cost Today</div>
                        <div class="metric-value" id="estimateCurrentCost">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Predicted Cost</div>
                        <div class="metric-value" id="estimatePredictedCost">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label">Recommendation</div>
                        <div class="metric-value" id="estimateRecommendation">--</div>
                    </div>
                    <div class="metric">
                        <div class="metric-label" id="estimateConfidence">Confidence: --</div>
                    </div>
                </div>
            </section>

            <!-- Material Prices -->
            <section class="card wide" id="material-table">
                <div class="card-header">
                    <span class="card-title">🧱 Material Prices Today</span>
                </div>
                <table class="prices-table">
                    <thead>
                        <tr>
                            <th>Material</th>
                            <th>Price</th>
                            <th>Updated</th>
                        </tr>
                    </thead>
                    <tbody id="materialsBody">
                        <tr><td colspan="3" style="text-align: center; color: var(--text-dim);">Loading...</td></tr>
                    </tbody>
                </table>
            </section>
        </div>
    </main>

    <footer class="footer">
        <span>Diesel <strong id="footerDiesel">₱--</strong></span>
        <span>Exchange <strong id="footerExchange">--</strong></span>
        <span>Inflation <strong id="footerInflation">--%</strong></span>
        <span>Status <strong id="footerStatus">OFFLINE</strong></span>
    </footer>

    <div class="toast" id="toast"></div>
"##;

use super::Labels;

pub static LABELS: Labels = Labels {
    dashboard_title: "Commission Dashboard",
    select_seller: "Select seller",
    route: "Route",
    sales_representative: "Sales Representative",
    select_period: "Select period",
    language: "Language",
    loading: "Loading data...",
    error: "Error",
    no_data: "No data",

    weekly_commission: "Weekly Commission",
    this_week: "This week",

    growth_by_volume: "Growth by Volume",
    total_sales_quarter: "Total Sales this Quarter",
    target_growth: "Target: Growth of",
    growth_target: "Growth Target",
    current_month_sales: "Current Month Sales",
    remaining_needed: "Remaining for Growth",
    commission_earned: "Commission Earned",

    payment_collection: "Collections",
    total_collected: "Total collected",
    invoices_to_collect: "Invoices to collect",
    overdue: "Overdue",
    upcoming: "Upcoming",
    commission_description: "Commission description",
    collection_rate_description: "0.5% of the total amount collected",
    collection_caption: "*Only collections processed on credit during this week apply",
    payments_collected: "payments collected",
    of_payments: "of",

    commission_summary: "Commission Summary",
    total_commission: "Total Commission",
    period_goal: "Period Goal",
    of_target: "of target",
    to_goal: "to reach goal",
    goal_completed: "Goal Completed! 🎉",
    achieved: "Achieved!",
    not_yet: "Not Yet",
    on_track: "On Track",
    close: "Close",
    at_risk: "At Risk",

    achievement_progress: "Achievement Progress",
    current_level: "Current Level",
    progress_to: "Progress to",
    next_level: "Next Level",
    earned: "Earned",
    locked: "Locked",
    complete: "Complete",

    commission_drivers: "Commission Drivers",
    progress: "Progress",
    current: "Current",
    goal: "Goal",
    badge: "Badge",
    reach: "Reach",
    to_earn: "to earn +",
    more: "more",
    increasing: "Increasing",
    decreasing: "Decreasing",
    next_threshold: "Next Threshold",
    show_details: "Show details",
    hide_details: "Hide details",

    penalties: "Penalties",
    no_penalties: "No Penalties",
    no_penalties_message: "Great job! You don't have any penalties for this period.",
    total_penalties: "Total Penalties",
    total: "Total",

    commission_simulator: "Commission Simulator",
    number_of_sales: "Number of Sales",
    avg_sale_value: "Avg Sale Value",
    calculate_earnings: "Calculate Potential Earnings",
    if_you_close: "If you close",
    more_sales: "more sales",
    at: "at",
    each: "each",
    additional_earnings: "You'll earn an additional",
    total_potential: "Total potential commission",

    performance_history: "Performance History",
    historical_performance: "Historical Performance",
    actual: "Actual",
    target: "Target",
    best_performance: "Best Performance",
    area_for_improvement: "Area for Improvement",

    motivation_success: "Great job! You are very close to your period goal.",
    motivation_warning: "You're doing well! One last push and you'll reach your goal.",
    motivation_info: "Every sale counts. Check your drivers to find opportunities.",

    months: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
};

use super::Labels;

pub static LABELS: Labels = Labels {
    dashboard_title: "Panel de Comisiones",
    select_seller: "Seleccionar vendedor",
    route: "Ruta",
    sales_representative: "Representante de Ventas",
    select_period: "Seleccionar período",
    language: "Idioma",
    loading: "Cargando datos...",
    error: "Error",
    no_data: "Sin datos",

    weekly_commission: "Comisión Semanal",
    this_week: "Esta semana",

    growth_by_volume: "Crecimiento por Volumen",
    total_sales_quarter: "Ventas Totales este Trimestre",
    target_growth: "Meta: Crecimiento del",
    growth_target: "Meta de Crecimiento",
    current_month_sales: "Ventas del Mes Actual",
    remaining_needed: "Saldo Pendiente para Crecimiento",
    commission_earned: "Comisión Ganada",

    payment_collection: "Cobros",
    total_collected: "Total cobrado",
    invoices_to_collect: "Facturas por cobrar",
    overdue: "Vencidas",
    upcoming: "Por vencer",
    commission_description: "Descripción de comisión",
    collection_rate_description: "0.5% sobre el monto total de los cobros realizados",
    collection_caption: "*Únicamente aplican cobros procesados por créditos durante esta semana",
    payments_collected: "pagos cobrados",
    of_payments: "de",

    commission_summary: "Resumen de Comisiones",
    total_commission: "Comisión Total",
    period_goal: "Meta del Período",
    of_target: "del objetivo",
    to_goal: "para alcanzar meta",
    goal_completed: "¡Meta Completada! 🎉",
    achieved: "¡Logrado!",
    not_yet: "Aún No",
    on_track: "En Camino",
    close: "Cerca",
    at_risk: "En Riesgo",

    achievement_progress: "Progreso de Logros",
    current_level: "Nivel Actual",
    progress_to: "Progreso hacia",
    next_level: "Siguiente Nivel",
    earned: "Ganado",
    locked: "Bloqueado",
    complete: "Completado",

    commission_drivers: "Impulsores de Comisión",
    progress: "Progreso",
    current: "Actual",
    goal: "Meta",
    badge: "Insignia",
    reach: "Alcanza",
    to_earn: "para ganar +",
    more: "más",
    increasing: "Aumentando",
    decreasing: "Disminuyendo",
    next_threshold: "Próximo Umbral",
    show_details: "Ver detalle",
    hide_details: "Ocultar detalle",

    penalties: "Penalizaciones",
    no_penalties: "Sin Penalizaciones",
    no_penalties_message: "¡Excelente trabajo! No tienes penalizaciones para este período.",
    total_penalties: "Total de Penalizaciones",
    total: "Total",

    commission_simulator: "Simulador de Comisiones",
    number_of_sales: "Número de Ventas",
    avg_sale_value: "Valor Promedio de Venta",
    calculate_earnings: "Calcular Ganancias Potenciales",
    if_you_close: "Si cierras",
    more_sales: "ventas más",
    at: "a",
    each: "cada una",
    additional_earnings: "Ganarás adicionalmente",
    total_potential: "Comisión potencial total",

    performance_history: "Historial de Rendimiento",
    historical_performance: "Rendimiento Histórico",
    actual: "Real",
    target: "Objetivo",
    best_performance: "Mejor Rendimiento",
    area_for_improvement: "Área de Mejora",

    motivation_success: "¡Excelente trabajo! Estás muy cerca de tu meta del período.",
    motivation_warning: "¡Vas bien! Un último esfuerzo y alcanzarás tu meta.",
    motivation_info: "Cada venta cuenta. Revisa tus impulsores para encontrar oportunidades.",

    months: [
        "Enero",
        "Febrero",
        "Marzo",
        "Abril",
        "Mayo",
        "Junio",
        "Julio",
        "Agosto",
        "Septiembre",
        "Octubre",
        "Noviembre",
        "Diciembre",
    ],
};

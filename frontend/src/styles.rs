// Layout
pub const PAGE: &str = "max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const PAGE_TITLE: &str = "text-5xl font-black bg-clip-text text-transparent bg-gradient-to-r from-blue-600 via-purple-600 to-violet-600 tracking-tight";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-all duration-200";
pub const FOOTER: &str = "w-full bg-white/80 dark:bg-gray-900/80 backdrop-blur-md border-t border-gray-200/50 dark:border-gray-700/50";
pub const TOAST: &str = "fixed top-20 right-6 z-50 max-w-md bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded-lg shadow-lg flex items-center";

// Cards
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_TITLE: &str = "text-lg font-semibold text-gray-900 dark:text-white";
pub const CARD_TEXT: &str = "text-sm text-gray-600 dark:text-gray-400";
pub const STAT_CARD: &str = "rounded-xl p-4 border border-white/30 dark:border-gray-700/30 shadow-md hover:shadow-lg transition-all duration-300 backdrop-blur-sm flex flex-col items-center text-center";
pub const ACHIEVEMENT_UNLOCKED: &str = "rounded-xl p-4 border border-amber-300 dark:border-amber-600";
pub const ACHIEVEMENT_LOCKED: &str = "rounded-xl p-4 border border-gray-200 dark:border-gray-700 opacity-80";
pub const PROGRESS_TRACK: &str = "mt-3 h-2 w-full rounded-full bg-gray-200 dark:bg-gray-700";
pub const PROGRESS_FILL: &str = "h-2 rounded-full bg-gradient-to-r from-yellow-400 to-orange-500";

// Wheel
pub const WHEEL_RESULT: &str = "flex items-center justify-center px-6 py-4 rounded-xl bg-gradient-to-r from-violet-400 to-violet-600 border-2 border-violet-300 text-white font-bold text-xl shadow-lg animate-bounce";
pub const WHEEL_RESULT_DETAIL: &str = "text-sm text-gray-600 dark:text-gray-400 mt-3 bg-gray-100 dark:bg-gray-800 px-4 py-2 rounded-full";
pub const SPIN_READY: &str = "bg-gradient-to-r from-yellow-400 to-orange-500 hover:from-yellow-500 hover:to-orange-600 text-white shadow-lg hover:shadow-xl transform hover:-translate-y-0.5 active:translate-y-0";
pub const SPIN_DISABLED: &str = "bg-gradient-to-r from-gray-400 to-gray-500 opacity-75 cursor-not-allowed text-white";
pub const OPTIONS_INPUT: &str = "mt-2 block w-full h-64 rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 font-mono text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 focus:ring-2 focus:ring-blue-600";

// Buttons
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800";
pub const BUTTON_DANGER: &str = "inline-flex items-center justify-center rounded-lg bg-red-600 px-4 py-2 font-medium text-white hover:bg-red-700";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";

// Text
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const TEXT_HINT: &str = "text-xs text-gray-500 dark:text-gray-400 mt-1";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";

pub const GAME_CONTAINER: &str = "relative min-h-screen w-full overflow-hidden bg-gray-900 text-white select-none cursor-pointer flex flex-col items-center justify-center";
pub const TITLE: &str = "text-3xl font-bold mb-6 text-center bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 to-orange-500";
pub const WHEEL_WINDOW: &str = "relative w-64 overflow-hidden rounded-2xl border-4 border-yellow-400 shadow-lg bg-gray-800";
pub const WHEEL_POINTER: &str = "pointer-events-none absolute inset-x-0 top-1/2 -translate-y-1/2 border-y-4 border-yellow-300/80";
pub const SEGMENT: &str = "flex items-center justify-center text-5xl font-extrabold border-b border-gray-700";
pub const SEGMENT_ACTIVE: &str = "text-yellow-300";
pub const START_PROMPT: &str = "mt-8 text-xl font-semibold text-gray-200 animate-pulse";
pub const GAUGE_TRACK: &str = "relative mt-8 h-6 w-72 rounded-full bg-gray-700 overflow-hidden";
pub const GAUGE_FILL: &str = "absolute inset-y-0 left-0 bg-gradient-to-r from-green-400 via-yellow-400 to-red-500";
pub const GAUGE_INDICATOR: &str = "absolute inset-y-0 w-4 rounded-full bg-white shadow";
pub const SCORE_BOX: &str = "absolute top-6 right-6 rounded-xl bg-gray-800/90 px-5 py-3 text-center shadow-lg";
pub const SCORE_LABEL: &str = "text-xs uppercase tracking-wide text-gray-400";
pub const SCORE_VALUE: &str = "text-3xl font-bold text-yellow-300";
pub const ACTION_ROW: &str = "mt-8 flex space-x-4";
pub const BUTTON_STAY: &str = "inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-green-500 to-green-600 hover:from-green-600 hover:to-green-700 shadow-lg transition-all duration-300";
pub const BUTTON_SPIN: &str = "inline-flex items-center justify-center px-6 py-3 rounded-lg font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg transition-all duration-300";
pub const OVERLAY: &str = "absolute inset-0 z-50 flex flex-col items-center justify-center bg-black/70 backdrop-blur-sm";
pub const OVERLAY_TEXT: &str = "mb-8 text-5xl font-extrabold text-white text-center";
pub const BUTTON_PLAY_AGAIN: &str = "inline-flex items-center justify-center px-8 py-3 rounded-full font-semibold text-gray-900 bg-yellow-400 hover:bg-yellow-300 shadow-lg transition-all duration-300";
pub const NOT_FOUND: &str = "flex min-h-[80vh] flex-col items-center justify-center px-6 py-12 text-center";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const LINK: &str = "mt-4 text-blue-600 dark:text-blue-400 hover:text-blue-700 dark:hover:text-blue-300 transition-colors duration-200";

use crate::models::CalendarView;

pub fn render_index(date: &str, view: CalendarView) -> String {
    INDEX_HTML
        .replace("{{DATE}}", date)
        .replace("{{VIEW}}", view.as_str())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>HabitForge</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #0f172a;
      --bg-2: #1e293b;
      --panel: #1e293b;
      --card: #334155;
      --card-hover: #3e4c63;
      --ink: #f1f5f9;
      --muted: #94a3b8;
      --accent: #10b981;
      --accent-deep: #047857;
      --ring: rgba(16, 185, 129, 0.45);
      --shadow: 0 24px 60px rgba(2, 6, 23, 0.55);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, rgba(16, 185, 129, 0.12), transparent 55%),
        linear-gradient(160deg, var(--bg-1), #111c33 65%, var(--bg-1));
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
      overflow: hidden;
    }

    body.loaded {
      overflow: auto;
    }

    #loader-wrapper {
      position: fixed;
      inset: 0;
      z-index: 50;
      background: var(--bg-1);
      display: grid;
      place-items: center;
      transition: opacity 600ms ease;
    }

    #loader-wrapper.exiting {
      opacity: 0;
    }

    #loader-wrapper.hidden {
      display: none;
    }

    .loader-inner {
      display: grid;
      gap: 10px;
      text-align: center;
    }

    #counter {
      font-family: "Fraunces", "Georgia", serif;
      font-size: clamp(3rem, 9vw, 5rem);
      font-weight: 600;
      color: var(--accent);
    }

    #fade-in-text {
      font-size: 1.05rem;
      letter-spacing: 0.18em;
      text-transform: uppercase;
      color: #64748b;
      transition: color 200ms linear;
    }

    #please-wait-text {
      font-size: 0.85rem;
      color: var(--muted);
      opacity: 0;
      transition: opacity 400ms ease;
    }

    #please-wait-text.visible {
      opacity: 1;
    }

    .app {
      width: min(880px, 100%);
      background: var(--panel);
      border: 1px solid rgba(148, 163, 184, 0.12);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      opacity: 0;
      transform: translateY(18px);
      transition: opacity 600ms ease, transform 600ms ease;
    }

    .app.visible {
      opacity: 1;
      transform: translateY(0);
    }

    header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(1.9rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.98rem;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 18px;
      font-size: 0.95rem;
      font-weight: 600;
      font-family: inherit;
      cursor: pointer;
      transition: transform 150ms ease, background 150ms ease, box-shadow 150ms ease;
      color: var(--ink);
      background: var(--card);
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-accent {
      background: var(--accent);
      color: #04281d;
      box-shadow: 0 10px 24px rgba(16, 185, 129, 0.28);
    }

    .btn-accent:hover {
      background: #34d399;
    }

    #add-habit-form {
      display: flex;
      gap: 12px;
    }

    #new-habit-name {
      flex: 1;
      border: 1px solid rgba(148, 163, 184, 0.25);
      border-radius: 999px;
      background: var(--bg-1);
      color: var(--ink);
      font-family: inherit;
      font-size: 1rem;
      padding: 12px 20px;
    }

    #new-habit-name:focus {
      outline: 2px solid var(--ring);
      border-color: transparent;
    }

    #habit-list {
      display: grid;
      gap: 12px;
    }

    .empty-note {
      text-align: center;
      color: var(--muted);
      padding: 14px 0;
    }

    .habit-row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 14px;
      padding: 16px 18px;
      background: var(--card);
      border-radius: 18px;
      transition: transform 200ms ease, background 200ms ease;
    }

    .habit-row:hover {
      background: var(--card-hover);
      transform: scale(1.01);
    }

    .habit-row.toggling {
      animation: pulse 300ms ease;
    }

    .habit-row .who {
      display: flex;
      align-items: center;
      gap: 14px;
      flex: 1;
    }

    .habit-row input[type='checkbox'] {
      width: 22px;
      height: 22px;
      accent-color: var(--accent);
      cursor: pointer;
    }

    .habit-row label {
      font-size: 1.05rem;
      font-weight: 500;
      cursor: pointer;
    }

    .streak-badge {
      background: var(--bg-1);
      color: var(--accent);
      font-size: 0.88rem;
      font-weight: 600;
      padding: 6px 12px;
      border-radius: 999px;
      white-space: nowrap;
    }

    .calendar-header {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 16px;
    }

    #current-period {
      margin: 0;
      font-size: 1.35rem;
      font-weight: 600;
    }

    .nav-buttons {
      display: flex;
      gap: 8px;
    }

    .nav-buttons button {
      width: 42px;
      padding: 10px 0;
    }

    .tabs {
      display: flex;
      gap: 6px;
      padding: 6px;
      background: var(--bg-1);
      border-radius: 999px;
    }

    .tab {
      background: transparent;
      border-radius: 999px;
      padding: 8px 14px;
      font-size: 0.9rem;
      color: var(--muted);
    }

    .tab.active {
      background: var(--accent);
      color: #04281d;
    }

    #calendar-container {
      background: var(--bg-1);
      border: 1px solid rgba(148, 163, 184, 0.12);
      border-radius: 20px;
      padding: 18px;
      min-height: 220px;
    }

    .month-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 8px;
      text-align: center;
    }

    .month-grid .dow {
      color: var(--muted);
      font-size: 0.8rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      padding: 6px 0;
    }

    .day-cell {
      padding: 12px 0;
      border-radius: 12px;
      background: var(--card);
      font-weight: 500;
      transition: background 200ms ease;
    }

    .day-cell.blank {
      background: transparent;
    }

    .day-cell.completed {
      background: var(--accent-deep);
      color: #d1fae5;
    }

    .day-cell.today {
      outline: 2px solid var(--ring);
    }

    .week-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 10px;
    }

    .week-day {
      background: var(--card);
      border-radius: 14px;
      padding: 12px 10px;
      display: grid;
      gap: 10px;
    }

    .week-day.today {
      outline: 2px solid var(--ring);
    }

    .week-day .head {
      display: grid;
      text-align: center;
      gap: 2px;
    }

    .week-day .head .dow {
      font-size: 0.72rem;
      font-weight: 600;
      text-transform: uppercase;
      letter-spacing: 0.08em;
      color: var(--muted);
    }

    .week-day .head .num {
      font-size: 1.3rem;
      font-weight: 600;
    }

    .mark-row {
      display: flex;
      align-items: center;
      gap: 8px;
      font-size: 0.82rem;
      color: var(--muted);
      overflow: hidden;
    }

    .mark-row .name {
      white-space: nowrap;
      overflow: hidden;
      text-overflow: ellipsis;
    }

    .dot {
      flex: none;
      width: 12px;
      height: 12px;
      border-radius: 50%;
      background: #475569;
    }

    .dot.completed {
      background: var(--accent);
    }

    .day-list {
      display: grid;
      gap: 12px;
    }

    .day-list .habit-row .dot {
      width: 20px;
      height: 20px;
    }

    .status {
      font-size: 0.95rem;
      color: var(--muted);
      min-height: 1.2em;
    }

    .status[data-type='error'] {
      color: #f87171;
    }

    .status[data-type='ok'] {
      color: var(--accent);
    }

    .hint {
      margin: 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    @keyframes pulse {
      0% { transform: scale(1); }
      50% { transform: scale(1.03); }
      100% { transform: scale(1); }
    }

    @media (max-width: 640px) {
      .app {
        padding: 28px 20px;
      }
      .week-grid {
        grid-template-columns: 1fr;
      }
      #add-habit-form {
        flex-direction: column;
      }
    }
  </style>
</head>
<body data-today="{{DATE}}" data-view="{{VIEW}}">
  <div id="loader-wrapper">
    <div class="loader-inner">
      <div id="counter">30</div>
      <div id="fade-in-text">Forging habits</div>
      <div id="please-wait-text">please wait</div>
    </div>
  </div>

  <main class="app" id="app">
    <header>
      <div>
        <h1>HabitForge</h1>
        <p class="subtitle">Small daily wins, kept on a calendar.</p>
      </div>
      <button id="export-btn" type="button">Export data</button>
    </header>

    <form id="add-habit-form">
      <input id="new-habit-name" name="name" type="text" placeholder="Forge a new habit..."
        autocomplete="off" />
      <button class="btn-accent" type="submit">Add habit</button>
    </form>

    <section id="habit-list"></section>

    <section class="calendar-area">
      <div class="calendar-header">
        <h2 id="current-period"></h2>
        <div class="tabs" role="tablist">
          <button class="tab" type="button" data-view="monthly" role="tab">Monthly</button>
          <button class="tab" type="button" data-view="weekly" role="tab">Weekly</button>
          <button class="tab" type="button" data-view="daily" role="tab">Daily</button>
        </div>
        <div class="nav-buttons">
          <button id="prev-btn" type="button" aria-label="Previous">&lt;</button>
          <button id="next-btn" type="button" aria-label="Next">&gt;</button>
        </div>
      </div>
      <div id="calendar-container"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="hint">Days are counted in the server's local calendar. A streak survives one missed day at most.</p>
  </main>

  <script>
    const loaderWrapper = document.getElementById('loader-wrapper');
    const appContainer = document.getElementById('app');
    const counterElement = document.getElementById('counter');
    const fadeInText = document.getElementById('fade-in-text');
    const pleaseWaitText = document.getElementById('please-wait-text');
    const habitList = document.getElementById('habit-list');
    const addHabitForm = document.getElementById('add-habit-form');
    const newHabitNameInput = document.getElementById('new-habit-name');
    const calendarContainer = document.getElementById('calendar-container');
    const currentPeriodHeader = document.getElementById('current-period');
    const prevBtn = document.getElementById('prev-btn');
    const nextBtn = document.getElementById('next-btn');
    const exportBtn = document.getElementById('export-btn');
    const statusEl = document.getElementById('status');
    const tabs = Array.from(document.querySelectorAll('.tab'));

    let activeView = document.body.dataset.view || 'monthly';

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const postJson = async (url, body) => {
      const res = await fetch(url, {
        method: 'POST',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(body)
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.json();
    };

    const renderHabits = (data) => {
      habitList.innerHTML = '';
      if (data.habits.length === 0) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'No habits added yet. Start forging one!';
        habitList.appendChild(note);
        return;
      }

      data.habits.forEach((habit) => {
        const row = document.createElement('div');
        row.className = 'habit-row';

        const who = document.createElement('div');
        who.className = 'who';

        const checkbox = document.createElement('input');
        checkbox.type = 'checkbox';
        checkbox.id = 'habit-' + habit.id;
        checkbox.checked = habit.completed_today;

        const label = document.createElement('label');
        label.htmlFor = checkbox.id;
        label.textContent = habit.name;

        const badge = document.createElement('span');
        badge.className = 'streak-badge';
        badge.textContent = '\u{1F525} ' + habit.streak;

        checkbox.addEventListener('change', () => {
          row.classList.add('toggling');
          setTimeout(() => {
            toggleHabit(habit.id).catch((err) => setStatus(err.message, 'error'));
          }, 300);
        });

        who.appendChild(checkbox);
        who.appendChild(label);
        row.appendChild(who);
        row.appendChild(badge);
        habitList.appendChild(row);
      });
    };

    const dowShort = (name) => name.slice(0, 3);

    const renderMonthly = (data) => {
      const grid = document.createElement('div');
      grid.className = 'month-grid';

      ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'].forEach((name) => {
        const head = document.createElement('div');
        head.className = 'dow';
        head.textContent = name;
        grid.appendChild(head);
      });

      data.cells.forEach((cell) => {
        const el = document.createElement('div');
        el.className = 'day-cell';
        if (cell.day === null) {
          el.classList.add('blank');
        } else {
          el.textContent = cell.day;
          if (cell.completed) {
            el.classList.add('completed');
          }
          if (cell.is_today) {
            el.classList.add('today');
          }
        }
        grid.appendChild(el);
      });

      calendarContainer.appendChild(grid);
    };

    const markRow = (mark, large) => {
      const row = document.createElement('div');
      row.className = large ? 'habit-row' : 'mark-row';

      const dot = document.createElement('div');
      dot.className = mark.completed ? 'dot completed' : 'dot';

      const name = document.createElement('span');
      name.className = 'name';
      name.textContent = mark.name;

      if (large) {
        name.style.fontSize = '1.05rem';
        row.appendChild(name);
        row.appendChild(dot);
      } else {
        row.appendChild(dot);
        row.appendChild(name);
      }
      return row;
    };

    const renderWeekly = (data) => {
      const grid = document.createElement('div');
      grid.className = 'week-grid';

      data.days.forEach((day) => {
        const col = document.createElement('div');
        col.className = day.is_today ? 'week-day today' : 'week-day';

        const head = document.createElement('div');
        head.className = 'head';

        const dow = document.createElement('span');
        dow.className = 'dow';
        dow.textContent = dowShort(day.weekday);

        const num = document.createElement('span');
        num.className = 'num';
        num.textContent = day.day;

        head.appendChild(dow);
        head.appendChild(num);
        col.appendChild(head);

        day.habits.forEach((mark) => col.appendChild(markRow(mark, false)));
        grid.appendChild(col);
      });

      calendarContainer.appendChild(grid);
    };

    const renderDaily = (data) => {
      const list = document.createElement('div');
      list.className = 'day-list';

      if (data.habits.length === 0) {
        const note = document.createElement('p');
        note.className = 'empty-note';
        note.textContent = 'Nothing to track on this day yet.';
        list.appendChild(note);
      }

      data.habits.forEach((mark) => list.appendChild(markRow(mark, true)));
      calendarContainer.appendChild(list);
    };

    const renderCalendar = (data) => {
      calendarContainer.innerHTML = '';
      currentPeriodHeader.textContent = data.title;
      if (data.view === 'monthly') {
        renderMonthly(data);
      } else if (data.view === 'weekly') {
        renderWeekly(data);
      } else {
        renderDaily(data);
      }
    };

    const setActiveView = (view) => {
      activeView = view;
      tabs.forEach((button) => {
        button.classList.toggle('active', button.dataset.view === view);
      });
    };

    const loadHabits = async () => {
      const res = await fetch('/api/habits');
      if (!res.ok) {
        throw new Error('Unable to load habits');
      }
      renderHabits(await res.json());
    };

    const loadCalendar = async () => {
      const res = await fetch('/api/calendar');
      if (!res.ok) {
        throw new Error('Unable to load calendar');
      }
      renderCalendar(await res.json());
    };

    const refresh = async () => {
      await Promise.all([loadHabits(), loadCalendar()]);
    };

    const toggleHabit = async (habitId) => {
      const data = await postJson('/api/toggle', { habit_id: habitId });
      renderHabits(data);
      await loadCalendar();
    };

    addHabitForm.addEventListener('submit', (event) => {
      event.preventDefault();
      const name = newHabitNameInput.value;
      newHabitNameInput.value = '';
      postJson('/api/habits', { name })
        .then((data) => {
          renderHabits(data);
          return loadCalendar();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    tabs.forEach((button) => {
      button.addEventListener('click', () => {
        setActiveView(button.dataset.view);
        postJson('/api/view', { view: button.dataset.view })
          .then(renderCalendar)
          .catch((err) => setStatus(err.message, 'error'));
      });
    });

    const navigate = (direction) => {
      postJson('/api/navigate', { direction })
        .then(renderCalendar)
        .catch((err) => setStatus(err.message, 'error'));
    };

    prevBtn.addEventListener('click', () => navigate(-1));
    nextBtn.addEventListener('click', () => navigate(1));

    exportBtn.addEventListener('click', () => {
      window.location.href = '/api/export';
    });

    // Loading screen: count up, then reveal the app and fetch state.
    let progress = 30;
    const initialFadedColor = '#6B7281';
    const finalFadedColor = '#F9FAFB';

    const lerp = (start, end, amt) => (1 - amt) * start + amt * end;

    const blend = (t) => {
      const r1 = parseInt(initialFadedColor.substr(1, 2), 16);
      const g1 = parseInt(initialFadedColor.substr(3, 2), 16);
      const b1 = parseInt(initialFadedColor.substr(5, 2), 16);
      const r2 = parseInt(finalFadedColor.substr(1, 2), 16);
      const g2 = parseInt(finalFadedColor.substr(3, 2), 16);
      const b2 = parseInt(finalFadedColor.substr(5, 2), 16);
      const r = Math.round(lerp(r1, r2, t));
      const g = Math.round(lerp(g1, g2, t));
      const b = Math.round(lerp(b1, b2, t));
      return 'rgb(' + r + ', ' + g + ', ' + b + ')';
    };

    const finishLoading = () => {
      loaderWrapper.classList.add('exiting');
      setTimeout(() => {
        loaderWrapper.classList.add('hidden');
        document.body.classList.add('loaded');
        appContainer.classList.add('visible');
        refresh().catch((err) => setStatus(err.message, 'error'));
      }, 600);
    };

    const startLoadingAnimation = () => {
      counterElement.textContent = progress;
      fadeInText.style.color = initialFadedColor;

      const interval = setInterval(() => {
        if (progress >= 100) {
          counterElement.textContent = 100;
          fadeInText.style.color = finalFadedColor;
          clearInterval(interval);
          setTimeout(finishLoading, 400);
          return;
        }

        progress = Math.min(progress + Math.floor(Math.random() * 5) + 1, 100);
        counterElement.textContent = progress;

        if (progress > 65) {
          pleaseWaitText.classList.add('visible');
        }
        if (progress > 60) {
          fadeInText.style.color = blend((progress - 60) / 40);
        }
      }, 100);
    };

    setActiveView(activeView);
    window.addEventListener('DOMContentLoaded', startLoadingAnimation);
  </script>
</body>
</html>
"#;

pub fn render_index(today: &str, logged_today: bool) -> String {
    let tagline = if logged_today {
        "Track your daily mood with emojis"
    } else {
        "How are you feeling today?"
    };
    INDEX_HTML
        .replace("{{TODAY}}", today)
        .replace("{{TAGLINE}}", tagline)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Emoji Mood Journal</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #d8e6f2;
      --ink: #27323d;
      --muted: #6b7a88;
      --accent: #5b8dc9;
      --accent-soft: #dce9f7;
      --card: rgba(255, 255, 255, 0.92);
      --line: #e3e9ef;
      --shadow: 0 20px 50px rgba(47, 72, 88, 0.14);
      --today-ring: #5b8dc9;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 55%),
        linear-gradient(150deg, var(--bg-1), #f5f1ea 70%, #eef3f8 100%);
      color: var(--ink);
      font-family: 'Space Grotesk', 'Trebuchet MS', sans-serif;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      display: grid;
      gap: 22px;
    }

    header {
      text-align: center;
    }

    header h1 {
      font-family: 'Fraunces', Georgia, serif;
      font-size: 34px;
      margin: 0 0 6px;
    }

    header p {
      margin: 0;
      color: var(--muted);
    }

    .card {
      background: var(--card);
      border-radius: 22px;
      box-shadow: var(--shadow);
      padding: 22px 24px;
    }

    .selected-date {
      text-align: center;
      color: var(--muted);
      font-size: 14px;
      margin-bottom: 12px;
    }

    .mood-row {
      display: flex;
      justify-content: center;
      gap: 12px;
      flex-wrap: wrap;
    }

    .mood-btn {
      border: 2px solid transparent;
      background: #f4f7fa;
      border-radius: 16px;
      font-size: 30px;
      padding: 10px 16px;
      cursor: pointer;
      transition: transform 120ms ease, border-color 120ms ease;
      display: grid;
      justify-items: center;
      gap: 2px;
    }

    .mood-btn small {
      font-size: 11px;
      color: var(--muted);
    }

    .mood-btn:hover {
      transform: translateY(-2px);
    }

    .mood-btn.active {
      border-color: var(--accent);
      background: var(--accent-soft);
    }

    .intensity {
      display: flex;
      align-items: center;
      gap: 12px;
      justify-content: center;
      margin-top: 16px;
      color: var(--muted);
      font-size: 14px;
    }

    .intensity input {
      width: 220px;
      accent-color: var(--accent);
    }

    .journal textarea {
      width: 100%;
      min-height: 76px;
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 12px;
      font: inherit;
      resize: vertical;
    }

    .journal-footer {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-top: 8px;
    }

    .counter {
      font-size: 12px;
      color: var(--muted);
    }

    button.primary {
      border: none;
      background: var(--accent);
      color: white;
      border-radius: 12px;
      padding: 8px 18px;
      font: inherit;
      cursor: pointer;
    }

    button.primary:disabled {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .photo-row {
      display: flex;
      gap: 8px;
      margin-top: 10px;
    }

    .photo-row input {
      flex: 1;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 8px 12px;
      font: inherit;
    }

    .tags {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-top: 4px;
    }

    .chip {
      border: 1px solid var(--line);
      background: white;
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 13px;
      cursor: pointer;
      display: inline-flex;
      align-items: center;
      gap: 6px;
    }

    .chip.on {
      background: var(--accent-soft);
      border-color: var(--accent);
    }

    .chip .x {
      color: var(--muted);
      font-weight: 600;
    }

    .tag-add {
      display: flex;
      gap: 8px;
      margin-top: 12px;
    }

    .tag-add input {
      flex: 1;
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 8px 12px;
      font: inherit;
    }

    .tabs {
      display: flex;
      justify-content: center;
      gap: 8px;
      flex-wrap: wrap;
    }

    .tabs button {
      border: 1px solid var(--line);
      background: white;
      border-radius: 999px;
      padding: 8px 18px;
      font: inherit;
      cursor: pointer;
    }

    .tabs button.active {
      background: var(--accent);
      border-color: var(--accent);
      color: white;
    }

    .panel.hidden {
      display: none;
    }

    .cal-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 12px;
    }

    .cal-head h2 {
      margin: 0;
      font-size: 20px;
    }

    .cal-head button {
      border: none;
      background: #f4f7fa;
      border-radius: 10px;
      padding: 6px 12px;
      font-size: 16px;
      cursor: pointer;
    }

    .cal-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 4px;
    }

    .dow {
      text-align: center;
      font-size: 12px;
      color: var(--muted);
      padding: 4px 0;
    }

    .day-cell {
      border: 1px solid transparent;
      background: #f8fafc;
      border-radius: 12px;
      min-height: 58px;
      padding: 4px 6px;
      cursor: pointer;
      display: grid;
      gap: 2px;
      justify-items: center;
      font-size: 12px;
    }

    .day-cell .emoji {
      font-size: 18px;
      line-height: 1;
    }

    .day-cell.outside {
      opacity: 0.38;
    }

    .day-cell.today {
      border-color: var(--today-ring);
    }

    .day-cell.selected {
      background: var(--accent-soft);
    }

    .day-cell .dot {
      width: 5px;
      height: 5px;
      border-radius: 50%;
      background: var(--accent);
    }

    .chart-wrap {
      display: flex;
      gap: 10px;
      align-items: stretch;
    }

    .chart-moods {
      display: flex;
      flex-direction: column;
      justify-content: space-between;
      padding: 18px 0 30px;
      font-size: 18px;
    }

    svg.chart {
      width: 100%;
      height: 300px;
    }

    .chart-grid-line {
      stroke: #dde5ec;
      stroke-width: 1;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
      font-family: 'Space Grotesk', sans-serif;
    }

    .pixels-scroll {
      overflow-x: auto;
    }

    table.pixels {
      border-collapse: collapse;
      margin: 0 auto;
    }

    table.pixels th,
    table.pixels td {
      border: 1px solid var(--line);
      width: 22px;
      height: 22px;
      font-size: 10px;
      text-align: center;
      color: var(--muted);
      padding: 0;
    }

    td.pixel {
      cursor: pointer;
    }

    td.pixel.void {
      background: #f8fafc;
      cursor: default;
    }

    .feed {
      display: grid;
      gap: 12px;
    }

    .feed-card {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 14px 16px;
      display: grid;
      gap: 6px;
      cursor: pointer;
    }

    .feed-head {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    .feed-head .emoji {
      font-size: 26px;
    }

    .feed-head .when {
      color: var(--muted);
      font-size: 13px;
    }

    .feed-tags {
      display: flex;
      gap: 6px;
      flex-wrap: wrap;
    }

    .feed-tags span {
      background: #f4f7fa;
      border-radius: 999px;
      padding: 2px 10px;
      font-size: 12px;
      color: var(--muted);
    }

    .feed-empty {
      text-align: center;
      color: var(--muted);
      padding: 28px 0;
    }

    .status {
      position: fixed;
      bottom: 22px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: white;
      border-radius: 999px;
      padding: 10px 22px;
      font-size: 14px;
      opacity: 0;
      transition: opacity 180ms ease;
      pointer-events: none;
      max-width: 90vw;
      text-align: center;
    }

    .status.show {
      opacity: 1;
    }

    .status.warn {
      background: #a14d2a;
    }
  </style>
</head>
<body>
  <div class="app">
    <header>
      <h1>Emoji Mood Journal</h1>
      <p id="tagline">{{TAGLINE}}</p>
    </header>

    <section class="card">
      <div class="selected-date" id="selected-date"></div>
      <div class="mood-row" id="mood-row"></div>
      <div class="intensity">
        <span>Intensity</span>
        <input type="range" id="intensity" min="1" max="10" step="1" value="5" />
        <strong id="intensity-value">5</strong>
      </div>
    </section>

    <section class="card journal">
      <textarea id="journal" maxlength="100" placeholder="Add a short note about your day (optional)"></textarea>
      <div class="journal-footer">
        <span class="counter"><span id="journal-count">0</span>/100</span>
        <button class="primary" id="save-journal">Save note</button>
      </div>
      <div class="photo-row">
        <input id="photo-url" placeholder="Photo URL (optional)" />
        <button class="primary" id="save-photo">Attach</button>
      </div>
    </section>

    <section class="card">
      <div class="tags" id="tags"></div>
      <div class="tag-add">
        <input id="new-tag" maxlength="30" placeholder="Add your own tag, e.g. Morning Run" />
        <button class="primary" id="add-tag">Add tag</button>
      </div>
    </section>

    <nav class="tabs" id="tabs">
      <button data-view="calendar" class="active">Calendar</button>
      <button data-view="chart">Mood chart</button>
      <button data-view="pixels">Year in pixels</button>
      <button data-view="history">History</button>
    </nav>

    <section class="card panel" id="panel-calendar">
      <div class="cal-head">
        <button id="prev-month" aria-label="Previous month">&lsaquo;</button>
        <h2 id="cal-title"></h2>
        <button id="next-month" aria-label="Next month">&rsaquo;</button>
      </div>
      <div class="cal-grid" id="cal-grid"></div>
    </section>

    <section class="card panel hidden" id="panel-chart">
      <div class="cal-head">
        <button id="chart-prev" aria-label="Previous month">&lsaquo;</button>
        <h2 id="chart-title"></h2>
        <button id="chart-next" aria-label="Next month">&rsaquo;</button>
      </div>
      <div class="chart-wrap">
        <div class="chart-moods" id="chart-moods"></div>
        <svg class="chart" id="chart" viewBox="0 0 640 300" preserveAspectRatio="none"></svg>
      </div>
    </section>

    <section class="card panel hidden" id="panel-pixels">
      <div class="cal-head">
        <button id="pixels-prev" aria-label="Previous year">&lsaquo;</button>
        <h2 id="pixels-title"></h2>
        <button id="pixels-next" aria-label="Next year">&rsaquo;</button>
      </div>
      <div class="pixels-scroll" id="pixels"></div>
    </section>

    <section class="card panel hidden" id="panel-history">
      <div class="feed" id="feed"></div>
    </section>
  </div>

  <div class="status" id="status"></div>

  <script>
    const TODAY = '{{TODAY}}';
    const MONTH_NAMES = [
      'January', 'February', 'March', 'April', 'May', 'June',
      'July', 'August', 'September', 'October', 'November', 'December'
    ];
    const DAY_NAMES = ['Sun', 'Mon', 'Tue', 'Wed', 'Thu', 'Fri', 'Sat'];

    const state = {
      moods: [],
      moodsById: {},
      tags: [],
      selectedDate: TODAY,
      entry: null,
      year: Number(TODAY.slice(0, 4)),
      month0: Number(TODAY.slice(5, 7)) - 1,
      pixelsYear: Number(TODAY.slice(0, 4)),
      view: 'calendar'
    };

    const el = (id) => document.getElementById(id);
    const statusEl = el('status');
    let statusTimer = null;

    const toast = (message, warn) => {
      statusEl.textContent = message;
      statusEl.className = warn ? 'status show warn' : 'status show';
      clearTimeout(statusTimer);
      statusTimer = setTimeout(() => {
        statusEl.className = 'status';
      }, 2200);
    };

    const getJSON = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const sendJSON = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error((await res.text()) || 'Request failed');
      }
      return res.json();
    };

    const entryMood = () => (state.entry ? state.entry.mood : null);
    const entryTags = () => (state.entry && state.entry.tags ? state.entry.tags : []);

    const renderSelectedDate = () => {
      const label = state.selectedDate === TODAY ? 'today' : state.selectedDate;
      el('selected-date').textContent = 'Logging for ' + label;
    };

    const renderMoodRow = () => {
      const row = el('mood-row');
      row.innerHTML = '';
      // Happiest first, like the selector people are used to.
      [...state.moods].reverse().forEach((mood) => {
        const btn = document.createElement('button');
        btn.className = 'mood-btn' + (entryMood() === mood.mood ? ' active' : '');
        btn.innerHTML = mood.emoji + '<small>' + mood.label + '</small>';
        btn.addEventListener('click', () => {
          selectMood(mood.mood).catch((err) => toast(err.message, true));
        });
        row.appendChild(btn);
      });
      const intensity = state.entry ? state.entry.intensity : 5;
      el('intensity').value = intensity;
      el('intensity-value').textContent = intensity;
    };

    const renderEntryPanel = () => {
      const journal = state.entry && state.entry.journal ? state.entry.journal : '';
      el('journal').value = journal;
      el('journal-count').textContent = journal.length;
      el('photo-url').value = state.entry && state.entry.photo_url ? state.entry.photo_url : '';
    };

    const renderTags = () => {
      const box = el('tags');
      box.innerHTML = '';
      const selected = entryTags();
      state.tags.forEach((tag) => {
        const chip = document.createElement('button');
        chip.className = 'chip' + (selected.includes(tag.id) ? ' on' : '');
        chip.textContent = tag.name;
        chip.addEventListener('click', () => {
          toggleTag(tag.id).catch((err) => toast(err.message, true));
        });
        if (tag.is_custom) {
          const x = document.createElement('span');
          x.className = 'x';
          x.textContent = '×';
          x.addEventListener('click', (event) => {
            event.stopPropagation();
            removeCustomTag(tag.id).catch((err) => toast(err.message, true));
          });
          chip.appendChild(x);
        }
        box.appendChild(chip);
      });
    };

    const renderCalendar = async () => {
      const cells = await getJSON('/api/calendar?year=' + state.year + '&month0=' + state.month0);
      el('cal-title').textContent = MONTH_NAMES[state.month0] + ' ' + state.year;
      const grid = el('cal-grid');
      grid.innerHTML = '';
      DAY_NAMES.forEach((name) => {
        const head = document.createElement('div');
        head.className = 'dow';
        head.textContent = name;
        grid.appendChild(head);
      });
      cells.forEach((cell) => {
        const div = document.createElement('div');
        let cls = 'day-cell';
        if (!cell.in_month) cls += ' outside';
        if (cell.is_today) cls += ' today';
        if (cell.date === state.selectedDate) cls += ' selected';
        div.className = cls;
        const mood = cell.mood ? state.moodsById[cell.mood] : null;
        div.innerHTML =
          '<span>' + cell.day + '</span>' +
          (mood ? '<span class="emoji">' + mood.emoji + '</span>' : '') +
          (cell.has_journal ? '<span class="dot"></span>' : '');
        div.addEventListener('click', () => {
          selectDate(cell.date).catch((err) => toast(err.message, true));
        });
        grid.appendChild(div);
      });
    };

    const renderChart = async () => {
      const series = await getJSON('/api/series?year=' + state.year + '&month0=' + state.month0);
      el('chart-title').textContent = MONTH_NAMES[state.month0] + ' ' + state.year + ' mood';

      const moodAxis = el('chart-moods');
      moodAxis.innerHTML = '';
      [...state.moods].reverse().forEach((mood) => {
        const span = document.createElement('span');
        span.textContent = mood.emoji;
        span.title = mood.label;
        moodAxis.appendChild(span);
      });

      const svg = el('chart');
      const width = 640;
      const height = 300;
      const padX = 26;
      const padTop = 18;
      const padBottom = 30;
      const count = series.points.length;
      const xStep = count > 1 ? (width - padX * 2) / (count - 1) : 0;
      const x = (i) => padX + i * xStep;
      const y = (score) => padTop + (5 - score) * ((height - padTop - padBottom) / 4);

      let parts = '';
      for (let score = 1; score <= 5; score += 1) {
        parts += '<line class="chart-grid-line" x1="' + padX + '" y1="' + y(score) +
          '" x2="' + (width - padX) + '" y2="' + y(score) + '" />';
      }

      // Gap markers split the line: no interpolation across missing days.
      let run = [];
      const runs = [];
      series.points.forEach((point, index) => {
        if (point.score === null || point.score === undefined) {
          if (run.length) runs.push(run);
          run = [];
        } else {
          run.push({ index, point });
        }
      });
      if (run.length) runs.push(run);

      runs.forEach((segment) => {
        if (segment.length > 1) {
          const d = segment
            .map((p, i) => (i === 0 ? 'M' : 'L') + ' ' + x(p.index).toFixed(1) + ' ' + y(p.point.score).toFixed(1))
            .join(' ');
          parts += '<path d="' + d + '" fill="none" stroke="' +
            state.moodsById[scoreMood(segment[0].point.score)].color + '" stroke-width="2.5" />';
        }
      });

      series.points.forEach((point, index) => {
        if (point.score === null || point.score === undefined) return;
        const mood = state.moodsById[scoreMood(point.score)];
        const r = point.extreme ? 7 : 4.5;
        const stroke = point.extreme ? ' stroke="rgba(20,20,20,0.9)" stroke-width="2"' : '';
        parts += '<circle cx="' + x(index).toFixed(1) + '" cy="' + y(point.score).toFixed(1) +
          '" r="' + r + '" fill="' + mood.color + '"' + stroke +
          '><title>' + point.date + ' ' + mood.label + '</title></circle>';
      });

      const labelEvery = count > 16 ? 2 : 1;
      series.points.forEach((point, index) => {
        if ((point.day - 1) % labelEvery !== 0) return;
        parts += '<text class="chart-label" x="' + x(index).toFixed(1) + '" y="' + (height - 10) +
          '" text-anchor="middle">' + point.day + '</text>';
      });

      svg.innerHTML = parts;
    };

    const scoreMood = (score) => {
      const row = state.moods.find((mood) => mood.score === score);
      return row ? row.mood : 'neutral';
    };

    const renderPixels = async () => {
      const grid = await getJSON('/api/pixels?year=' + state.pixelsYear);
      el('pixels-title').textContent = grid.year + ' in pixels';
      const initials = MONTH_NAMES.map((name) => name[0]);
      let html = '<table class="pixels"><tr><th></th>' +
        initials.map((i) => '<th>' + i + '</th>').join('') + '</tr>';
      for (let day = 1; day <= 31; day += 1) {
        html += '<tr><th>' + day + '</th>';
        grid.months.forEach((month) => {
          const cell = month.cells[day - 1];
          if (!cell.exists) {
            html += '<td class="pixel void"></td>';
          } else {
            const mood = cell.mood ? state.moodsById[cell.mood] : null;
            const title = cell.date + (mood ? ' - ' + mood.label : '');
            html += '<td class="pixel" data-date="' + cell.date +
              '" style="background:' + cell.color + '" title="' + title + '"></td>';
          }
        });
        html += '</tr>';
      }
      html += '</table>';
      el('pixels').innerHTML = html;
      el('pixels').querySelectorAll('td.pixel[data-date]').forEach((td) => {
        td.addEventListener('click', () => {
          const date = td.dataset.date;
          state.year = Number(date.slice(0, 4));
          state.month0 = Number(date.slice(5, 7)) - 1;
          setView('calendar');
          selectDate(date).catch((err) => toast(err.message, true));
        });
      });
    };

    const renderHistory = async () => {
      const feed = await getJSON('/api/history');
      const box = el('feed');
      if (!feed.length) {
        box.innerHTML = '<div class="feed-empty">No mood history yet.<br/>Start logging your moods to see them here!</div>';
        return;
      }
      box.innerHTML = '';
      const tagName = (id) => {
        const tag = state.tags.find((candidate) => candidate.id === id);
        return tag ? tag.name : id;
      };
      feed.forEach((item) => {
        const card = document.createElement('div');
        card.className = 'feed-card';
        const tags = (item.tags || []).map((id) => '<span>' + escapeHtml(tagName(id)) + '</span>').join('');
        card.innerHTML =
          '<div class="feed-head"><span class="emoji">' + item.emoji + '</span>' +
          '<div><strong>' + item.label + '</strong> (' + item.score + '/5, intensity ' + item.intensity + ')' +
          '<div class="when">' + item.date + '</div></div></div>' +
          (item.journal ? '<div>' + escapeHtml(item.journal) + '</div>' : '') +
          (tags ? '<div class="feed-tags">' + tags + '</div>' : '') +
          (item.photo_url ? '<div class="when">photo: ' + escapeHtml(item.photo_url) + '</div>' : '');
        card.addEventListener('click', () => {
          state.year = Number(item.date.slice(0, 4));
          state.month0 = Number(item.date.slice(5, 7)) - 1;
          setView('calendar');
          selectDate(item.date).catch((err) => toast(err.message, true));
        });
        box.appendChild(card);
      });
    };

    const escapeHtml = (text) => {
      const div = document.createElement('div');
      div.textContent = text;
      return div.innerHTML;
    };

    const renderActivePanel = () => {
      const render = {
        calendar: renderCalendar,
        chart: renderChart,
        pixels: renderPixels,
        history: renderHistory
      }[state.view];
      render().catch((err) => toast(err.message, true));
    };

    const setView = (view) => {
      state.view = view;
      document.querySelectorAll('#tabs button').forEach((button) => {
        button.classList.toggle('active', button.dataset.view === view);
      });
      ['calendar', 'chart', 'pixels', 'history'].forEach((name) => {
        el('panel-' + name).classList.toggle('hidden', name !== view);
      });
      renderActivePanel();
    };

    // Journal text typed before a mood exists stays right here in the
    // textarea; switching dates reloads from the stored entry and the
    // draft is gone.
    const selectDate = async (date) => {
      state.selectedDate = date;
      await loadDay();
      renderSelectedDate();
      renderMoodRow();
      renderEntryPanel();
      renderTags();
      if (state.view === 'calendar') {
        await renderCalendar();
      }
    };

    const loadDay = async () => {
      const data = await getJSON('/api/day/' + state.selectedDate);
      state.entry = data.entry;
    };

    const refreshAfterMutation = async () => {
      renderSelectedDate();
      renderMoodRow();
      renderEntryPanel();
      renderTags();
      renderActivePanel();
      if (state.selectedDate === TODAY && state.entry) {
        el('tagline').textContent = 'Track your daily mood with emojis';
      }
    };

    const selectMood = async (mood) => {
      const body = { mood };
      if (state.entry) {
        body.intensity = Number(el('intensity').value);
      }
      const data = await sendJSON('POST', '/api/day/' + state.selectedDate + '/mood', body);
      state.entry = data.entry;
      await refreshAfterMutation();
      const saved = state.selectedDate === TODAY ? 'today' : state.selectedDate;
      const row = state.moodsById[mood];
      if ((mood === 'sad' || mood === 'verysad') && !(state.entry && state.entry.journal)) {
        toast('Mood saved for ' + saved + '. Consider adding a note about why you are feeling ' +
          row.label.toLowerCase() + '.');
      } else {
        toast('Mood saved for ' + saved + '!');
      }
    };

    const saveJournal = async () => {
      if (!state.entry) {
        toast('Pick a mood first - your note is kept here until you do.', true);
        return;
      }
      const text = el('journal').value;
      const data = await sendJSON('POST', '/api/day/' + state.selectedDate + '/journal', { journal: text });
      state.entry = data.entry;
      await refreshAfterMutation();
      toast('Note saved!');
    };

    const savePhoto = async () => {
      if (!state.entry) {
        toast('Pick a mood first.', true);
        return;
      }
      const url = el('photo-url').value.trim();
      if (!url) {
        toast('Enter a photo URL first.', true);
        return;
      }
      const data = await sendJSON('POST', '/api/day/' + state.selectedDate + '/photo', { photo_url: url });
      state.entry = data.entry;
      await refreshAfterMutation();
      toast('Photo attached!');
    };

    const toggleTag = async (id) => {
      if (!state.entry) {
        toast('Pick a mood first, then tag the day.', true);
        return;
      }
      const selected = entryTags();
      const next = selected.includes(id)
        ? selected.filter((candidate) => candidate !== id)
        : selected.concat(id);
      const data = await sendJSON('POST', '/api/day/' + state.selectedDate + '/tags', { tags: next });
      state.entry = data.entry;
      await refreshAfterMutation();
    };

    const addCustomTag = async () => {
      const name = el('new-tag').value.trim();
      if (!name) {
        return;
      }
      const before = state.tags.length;
      const data = await sendJSON('POST', '/api/tags/custom', { name });
      state.tags = data.tags;
      el('new-tag').value = '';
      renderTags();
      toast(state.tags.length > before ? 'Tag added!' : 'That tag already exists.');
    };

    const removeCustomTag = async (id) => {
      const data = await sendJSON('DELETE', '/api/tags/custom/' + encodeURIComponent(id));
      state.tags = data.tags;
      await loadDay();
      await refreshAfterMutation();
      toast('Tag removed.');
    };

    const changeMonth = (delta) => {
      state.month0 += delta;
      if (state.month0 < 0) {
        state.month0 = 11;
        state.year -= 1;
      } else if (state.month0 > 11) {
        state.month0 = 0;
        state.year += 1;
      }
      renderActivePanel();
    };

    el('prev-month').addEventListener('click', () => changeMonth(-1));
    el('next-month').addEventListener('click', () => changeMonth(1));
    el('chart-prev').addEventListener('click', () => changeMonth(-1));
    el('chart-next').addEventListener('click', () => changeMonth(1));
    el('pixels-prev').addEventListener('click', () => {
      state.pixelsYear -= 1;
      renderActivePanel();
    });
    el('pixels-next').addEventListener('click', () => {
      state.pixelsYear += 1;
      renderActivePanel();
    });

    el('journal').addEventListener('input', () => {
      el('journal-count').textContent = el('journal').value.length;
    });
    el('save-journal').addEventListener('click', () => {
      saveJournal().catch((err) => toast(err.message, true));
    });
    el('save-photo').addEventListener('click', () => {
      savePhoto().catch((err) => toast(err.message, true));
    });
    el('add-tag').addEventListener('click', () => {
      addCustomTag().catch((err) => toast(err.message, true));
    });
    el('new-tag').addEventListener('keydown', (event) => {
      if (event.key === 'Enter') {
        addCustomTag().catch((err) => toast(err.message, true));
      }
    });
    el('intensity').addEventListener('input', () => {
      el('intensity-value').textContent = el('intensity').value;
    });
    el('intensity').addEventListener('change', () => {
      if (state.entry) {
        selectMood(state.entry.mood).catch((err) => toast(err.message, true));
      }
    });
    document.querySelectorAll('#tabs button').forEach((button) => {
      button.addEventListener('click', () => setView(button.dataset.view));
    });

    const boot = async () => {
      state.moods = await getJSON('/api/moods');
      state.moods.forEach((mood) => {
        state.moodsById[mood.mood] = mood;
      });
      state.tags = (await getJSON('/api/tags')).tags;
      await loadDay();
      renderSelectedDate();
      renderMoodRow();
      renderEntryPanel();
      renderTags();
      renderActivePanel();
    };

    boot().catch((err) => toast(err.message, true));
  </script>
</body>
</html>
"#;
